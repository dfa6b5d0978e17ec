//! Detects which hardware platform a cover scan names.

use core_types::Platform;
use std::sync::OnceLock;
use strsim::jaro_winkler;
use strum::IntoEnumIterator;

use crate::normalizer::normalize;

/// Minimum Jaro-Winkler similarity for a misread line to count as an alias.
pub const MIN_PLATFORM_SIMILARITY: f64 = 0.92;

/// Aliases shorter than this (compacted) are only ever matched exactly.
const MIN_FUZZY_ALIAS_LENGTH: usize = 6;

struct AliasKey {
    platform: Platform,
    words: Vec<String>,
    compact: String,
    digits: String,
}

impl AliasKey {
    fn new(platform: Platform, alias: &str) -> Self {
        let words = words_of(alias);
        let compact = words.concat();
        let digits = digits_of(&compact);
        Self {
            platform,
            words,
            compact,
            digits,
        }
    }
}

/// Every alias of every platform, longest first so that `playstation 2` is
/// tried before `playstation`.
fn alias_keys() -> &'static Vec<AliasKey> {
    static KEYS: OnceLock<Vec<AliasKey>> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut keys: Vec<AliasKey> = Platform::iter()
            .flat_map(|platform| {
                platform
                    .aliases()
                    .iter()
                    .map(move |alias| AliasKey::new(platform, alias))
            })
            .collect();
        keys.sort_by(|a, b| b.compact.len().cmp(&a.compact.len()));
        keys
    })
}

pub fn detect_platform(raw: &str) -> Option<Platform> {
    if raw.trim().is_empty() {
        return None;
    }

    let cleaned = normalize(raw);
    let lines: Vec<Vec<String>> = raw
        .lines()
        .chain(cleaned.lines())
        .map(words_of)
        .filter(|words| !words.is_empty())
        .collect();

    let found = exact_match(&lines).or_else(|| fuzzy_match(&lines));
    if let Some(platform) = found {
        tracing::debug!(%platform, "Detected platform");
    }
    found
}

fn exact_match(lines: &[Vec<String>]) -> Option<Platform> {
    alias_keys()
        .iter()
        .find(|key| lines.iter().any(|line| contains_alias(line, key)))
        .map(|key| key.platform)
}

/// Whole-word containment. An alias without digits does not match when the
/// line goes on with a number, so `playstation 5` is not `playstation`.
fn contains_alias(line: &[String], key: &AliasKey) -> bool {
    let n = key.words.len();
    if n == 0 || line.len() < n {
        return false;
    }
    (0..=line.len() - n).any(|start| {
        if line[start..start + n] != key.words[..] {
            return false;
        }
        let followed_by_number = line
            .get(start + n)
            .is_some_and(|next| next.chars().all(|c| c.is_ascii_digit()));
        !(key.digits.is_empty() && followed_by_number)
    })
}

fn fuzzy_match(lines: &[Vec<String>]) -> Option<Platform> {
    let mut best: Option<(Platform, f64)> = None;
    for line in lines {
        let compact = line.concat();
        let digits = digits_of(&compact);
        for key in alias_keys()
            .iter()
            .filter(|key| key.compact.len() >= MIN_FUZZY_ALIAS_LENGTH && key.digits == digits)
        {
            let similarity = jaro_winkler(&compact, &key.compact);
            if similarity < MIN_PLATFORM_SIMILARITY {
                continue;
            }
            match best {
                Some((_, best_similarity)) if similarity <= best_similarity => {}
                _ => best = Some((key.platform, similarity)),
            }
        }
    }
    best.map(|(platform, _)| platform)
}

fn words_of(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

fn digits_of(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_platform() {
        let test_cases = vec![
            ("SEGA\nMaster System\nConsole", Some(Platform::MasterSystem)),
            ("SEGA\n    Ma5ter 5y5tem\n    M0N4C0 6P", Some(Platform::MasterSystem)),
            ("Gran Turismo 3\nPlayStation 2", Some(Platform::PlayStation2)),
            ("PS2", Some(Platform::PlayStation2)),
            ("SONIC THE HEDGEHOG\nSEGA GENESIS", Some(Platform::MegaDrive)),
            ("Super Mario World\nSuper Nintendo", Some(Platform::Snes)),
            ("HALO 3 - XBOX 360", Some(Platform::Xbox360)),
            ("Mega-CD", Some(Platform::SegaCd)),
            ("DREAMCSST", Some(Platform::Dreamcast)),
            ("SUPER MONACO GP II", None),
            ("PlayStation 5", None),
            ("", None),
        ];
        for (input, expected) in test_cases {
            assert_eq!(detect_platform(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_digit_signatures_must_agree() {
        assert_eq!(detect_platform("PlayStatlon 4"), Some(Platform::PlayStation4));
        assert_eq!(detect_platform("PlayStatlon 5"), None);
    }

    #[test]
    fn test_aliases_sorted_longest_first() {
        let lengths: Vec<usize> = alias_keys().iter().map(|k| k.compact.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }
}
