//! Franchise titles matched directly against raw recognizer output.
//!
//! Each canonical title is compiled into a pattern with the usual glyph
//! confusions baked in, so `5UPER M0NACO 6P` and `5 U P E R  MONACO GP` both
//! match "Super Monaco GP" without normalizing first.

use regex::Regex;
use std::sync::OnceLock;

/// Canonical titles, more specific first so that a longer title claims the text
/// before a shorter one that overlaps it.
pub const FRANCHISE_TITLES: &[&str] = &[
    "Super Monaco GP",
    "Monaco GP",
    "Super Mario Bros",
    "Super Mario World",
    "Super Mario Kart",
    "Mario Kart",
    "Mario",
    "Street Fighter",
    "Streets of Rage",
    "Sonic the Hedgehog",
    "Sonic",
    "Final Fantasy",
    "Dragon Quest",
    "Legend of Zelda",
    "Zelda",
    "Mega Man",
    "Castlevania",
    "Metroid",
    "Alex Kidd",
    "Phantasy Star",
    "Golden Axe",
    "Mortal Kombat",
    "Donkey Kong",
    "Pokemon",
    "Soul Calibur",
    "Gran Turismo",
    "Wonder Boy",
    "Shinobi",
    "Out Run",
    "Tekken",
    "Resident Evil",
    "Metal Gear",
];

const LETTER_GAP: &str = r"[ \t.\-]*";
const WORD_GAP: &str = r"[^A-Za-z0-9\n]*";
const NUMERAL_SUFFIX: &str =
    r"(?:[ \t*.:\-]*(?P<numeral>[|Il1!](?:[ \t]?[|Il1!]){0,2}|[I1l|]?[VX][I1l|]{0,3}|[2-9]))?";

#[derive(Debug, Clone, PartialEq)]
pub struct FranchiseMatch {
    pub title: String,
    pub start: usize,
    pub end: usize,
}

fn letter_class(c: char) -> String {
    let class = match c.to_ascii_uppercase() {
        'A' => "[A4@]",
        'B' => "[B8]",
        'E' => "[E3€]",
        'G' => "[G6]",
        'I' => "[I1l|!]",
        'L' => "[L1|]",
        'O' => "[O0@]",
        'P' => "[P9]",
        'S' => "[S5$]",
        'T' => "[T7+]",
        'Z' => "[Z2]",
        other => return regex::escape(&other.to_string()),
    };
    class.to_string()
}

/// Builds the misread-tolerant pattern for one canonical title.
pub fn fuzzy_pattern(title: &str) -> String {
    let words: Vec<String> = title
        .split_whitespace()
        .map(|word| {
            word.chars()
                .map(letter_class)
                .collect::<Vec<_>>()
                .join(LETTER_GAP)
        })
        .collect();
    format!(
        "(?i)(?P<base>{}){}",
        words.join(WORD_GAP),
        NUMERAL_SUFFIX
    )
}

fn franchise_patterns() -> &'static Vec<(&'static str, Regex)> {
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        FRANCHISE_TITLES
            .iter()
            .map(|title| (*title, Regex::new(&fuzzy_pattern(title)).unwrap()))
            .collect()
    })
}

/// Turns a misread numeral (`||`, `V1`, `l|`) into a clean one (`II`, `VI`).
pub fn normalize_numeral(numeral: &str) -> String {
    numeral
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '|' | 'I' | 'i' | 'l' | '1' | '!' => 'I',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Every franchise found in `text`, in table order, skipping matches that
/// overlap one already taken.
pub fn find_franchises(text: &str) -> Vec<FranchiseMatch> {
    let mut found: Vec<FranchiseMatch> = Vec::new();

    for (title, re) in franchise_patterns() {
        let candidate = re.captures_iter(text).find_map(|caps| {
            let base = caps.name("base")?;
            if preceded_by_letter(text, base.start()) {
                return None;
            }
            let mut end = base.end();
            let mut full_title = title.to_string();
            match caps.name("numeral") {
                Some(numeral) if !followed_by_alphanumeric(text, numeral.end()) => {
                    full_title = format!("{} {}", title, normalize_numeral(numeral.as_str()));
                    end = numeral.end();
                }
                _ if followed_by_letter(text, base.end()) => return None,
                _ => {}
            }
            Some(FranchiseMatch {
                title: full_title,
                start: base.start(),
                end,
            })
        });

        if let Some(candidate) = candidate {
            let overlaps = found
                .iter()
                .any(|f| candidate.start < f.end && f.start < candidate.end);
            if !overlaps {
                tracing::trace!(title = %candidate.title, "Franchise pattern matched");
                found.push(candidate);
            }
        }
    }

    found
}

fn preceded_by_letter(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphabetic())
}

fn followed_by_letter(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic())
}

fn followed_by_alphanumeric(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric())
}
