//! Glyph confusion tables for stylized cover lettering.
//!
//! The tables only ever produce letters, which is what keeps normalization
//! idempotent: nothing they emit is fed back into them.

use regex::Regex;
use std::sync::OnceLock;

/// Digits commonly read in place of a letter, in upper case.
pub const DIGIT_TO_LETTER: &[(char, char)] = &[
    ('0', 'O'),
    ('1', 'I'),
    ('2', 'Z'),
    ('3', 'E'),
    ('4', 'A'),
    ('5', 'S'),
    ('6', 'G'),
    ('7', 'T'),
    ('8', 'B'),
    ('9', 'P'),
];

/// Decorative symbols read in place of a letter. Applied only between two
/// alphanumeric characters, except `|` which is a letter wherever it sits in a word.
pub const SYMBOL_TO_LETTER: &[(char, char)] = &[
    ('|', 'I'),
    ('@', 'A'),
    ('$', 'S'),
    ('€', 'E'),
    ('%', 'X'),
    ('#', 'H'),
    ('*', 'X'),
    ('+', 'T'),
];

/// Punctuation that survives normalization.
pub const KEPT_PUNCTUATION: &[char] = &['-', ':', '(', ')', '&', '\'', '.'];

/// Rewrites a single whitespace-free token.
///
/// Tokens without letters (`2`, `1998`, `$29.99`) keep their digits. Pipe runs
/// such as `||` become roman numerals. Everything else has its decorative symbols
/// and digits mapped to letters in the token's dominant case, unless the token is
/// a known platform or ordinal code like `PS2` or `3RD`.
pub fn correct_token(token: &str) -> String {
    if is_pipe_numeral(token) {
        return "I".repeat(token.chars().count());
    }

    if !token.chars().any(|c| c.is_alphabetic()) {
        return token.to_string();
    }

    let lowercase = prefers_lowercase(token);
    let with_symbols = map_symbols(token, lowercase);
    if is_protected_code(&with_symbols) {
        return with_symbols;
    }

    with_symbols
        .chars()
        .map(|c| match digit_to_letter(c) {
            Some(letter) if lowercase => letter.to_ascii_lowercase(),
            Some(letter) => letter,
            None => c,
        })
        .collect()
}

pub fn digit_to_letter(c: char) -> Option<char> {
    DIGIT_TO_LETTER
        .iter()
        .find(|(digit, _)| *digit == c)
        .map(|(_, letter)| *letter)
}

fn symbol_to_letter(c: char) -> Option<char> {
    SYMBOL_TO_LETTER
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, letter)| *letter)
}

fn is_pipe_numeral(token: &str) -> bool {
    token.contains('|')
        && token.chars().count() <= 4
        && token.chars().all(|c| matches!(c, '|' | 'I' | 'l' | '1' | '!'))
}

fn prefers_lowercase(token: &str) -> bool {
    let lower = token.chars().filter(|c| c.is_lowercase()).count();
    let upper = token.chars().filter(|c| c.is_uppercase()).count();
    lower > upper
}

fn map_symbols(token: &str, lowercase: bool) -> String {
    let chars: Vec<char> = token.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let Some(letter) = symbol_to_letter(c) else {
                return c;
            };
            let interior = i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_alphanumeric()
                && chars[i + 1].is_alphanumeric();
            if c == '|' || interior {
                if lowercase {
                    letter.to_ascii_lowercase()
                } else {
                    letter
                }
            } else {
                c
            }
        })
        .collect()
}

fn is_protected_code(token: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:ps[1-5]|n64|3ds|[23]d|x360|32x|64dd|\d+k\d*|\d+(?:st|nd|rd|th))$")
            .unwrap()
    });

    let core = token.trim_matches(|c: char| !c.is_alphanumeric());
    re.is_match(core)
}
