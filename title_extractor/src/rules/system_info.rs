use core_types::Platform;
use std::sync::OnceLock;
use strum::IntoEnumIterator;

/// Boilerplate printed on cases and labels that never belongs to a title.
const BOILERPLATE_PHRASES: &[&str] = &[
    "master system",
    "mega drive",
    "playstation",
    "xbox",
    "nintendo entertainment system",
    "entertainment system",
    "video game system",
    "licensed by",
    "official seal",
    "seal of quality",
    "all rights reserved",
    "for use with",
    "compact disc",
];

pub const VENDOR_WORDS: &[&str] = &["sega", "nintendo", "sony", "microsoft"];

pub const TECHNICAL_TERMS: &[&str] = &[
    "console",
    "cartridge",
    "cart",
    "disc",
    "disk",
    "cd",
    "rom",
    "system",
    "version",
    "edition",
    "pal",
    "ntsc",
    "enterprises",
    "ltd",
    "inc",
];

/// Whether a line names hardware or a vendor rather than a game.
///
/// True when the line contains a platform name or packaging boilerplate as whole
/// words, or when every word is a vendor or technical term (`SEGA`, `Sega CD`,
/// `Console`).
pub fn is_system_info(line: &str) -> bool {
    let words = words_of(line);
    if words.is_empty() {
        return false;
    }

    let padded = format!(" {} ", words.join(" "));
    if system_phrases()
        .iter()
        .any(|phrase| padded.contains(&format!(" {} ", phrase)))
    {
        return true;
    }

    words
        .iter()
        .all(|w| VENDOR_WORDS.contains(&w.as_str()) || TECHNICAL_TERMS.contains(&w.as_str()))
}

/// Boilerplate phrases plus every platform alias, flattened to single-spaced
/// alphanumeric words.
fn system_phrases() -> &'static Vec<String> {
    static PHRASES: OnceLock<Vec<String>> = OnceLock::new();
    PHRASES.get_or_init(|| {
        let mut phrases: Vec<String> = BOILERPLATE_PHRASES.iter().map(|p| p.to_string()).collect();
        for platform in Platform::iter() {
            for alias in platform.aliases() {
                let phrase = words_of(alias).join(" ");
                if !phrases.contains(&phrase) {
                    phrases.push(phrase);
                }
            }
        }
        phrases
    })
}

fn words_of(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info_lines() {
        let test_cases = vec![
            ("SEGA", true),
            ("Master System", true),
            ("Console", true),
            ("SEGA MASTER SYSTEM", true),
            ("Sega CD", true),
            ("PlayStation 2", true),
            ("Nintendo Entertainment System", true),
            ("Licensed by Nintendo", true),
            ("Mega-CD", true),
            ("SUPER MONACO GP II", false),
            ("Sonic the Hedgehog", false),
            ("Street Fighter II", false),
            ("Racing Game", false),
            ("", false),
            ("!!!", false),
        ];
        for (input, expected) in test_cases {
            assert_eq!(is_system_info(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_platform_aliases_match_as_whole_words() {
        assert!(is_system_info("for the N64"));
        assert!(!is_system_info("PSXENO"));
    }
}
