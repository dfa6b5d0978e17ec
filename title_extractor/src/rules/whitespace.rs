use regex::Regex;
use std::sync::OnceLock;

pub fn normalize_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").unwrap());

    re.replace_all(s, " ").trim().to_string()
}

/// Rejoins letter-spaced logo text such as `"S U P E R   M O N A C O"`.
///
/// Only lines with a gap of two or more whitespace characters are touched. Each
/// gap-delimited group made entirely of single-character tokens is concatenated.
pub fn join_letter_spaced(line: &str) -> String {
    static GAP: OnceLock<Regex> = OnceLock::new();
    let gap = GAP.get_or_init(|| Regex::new(r"\s{2,}").unwrap());

    let trimmed = line.trim();
    if !gap.is_match(trimmed) {
        return line.to_string();
    }

    gap.split(trimmed)
        .map(|group| {
            let tokens: Vec<&str> = group.split_whitespace().collect();
            if tokens.len() >= 2 && tokens.iter().all(|t| t.chars().count() == 1) {
                tokens.concat()
            } else {
                group.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        let test_cases = vec![
            ("  SUPER   MONACO\tGP  ", "SUPER MONACO GP"),
            ("", ""),
            ("   ", ""),
            ("Sonic", "Sonic"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(normalize_whitespace(input), expected);
        }
    }

    #[test]
    fn test_join_letter_spaced() {
        let test_cases = vec![
            (
                "5 U P E R   M O N 4 C 0   6 P   | |",
                "5UPER MON4C0 6P ||",
            ),
            ("S O N I C  THE  HEDGEHOG", "SONIC THE HEDGEHOG"),
            // no wide gap, left alone
            ("A B C", "A B C"),
            ("STREET FIGHTER II", "STREET FIGHTER II"),
            // single-token groups are not merged with each other
            ("A  B", "A B"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(join_letter_spaced(input), expected);
        }
    }
}
