//! Last-resort strategies, run only when every normal strategy came back empty.

use core_types::CandidateOrigin;
use regex::Regex;
use std::sync::OnceLock;

use super::{ExtractionContext, ExtractionStrategy};
use crate::rules::{
    franchises::find_franchises,
    patterns::{count_game_words, count_sequel_numerals},
    system_info::is_system_info,
};

const STRUCTURAL_PATTERNS: &[&str] = &[
    // capitalized word pairs
    r"\b[A-Z][a-z]{2,}[ \t]+[A-Z][a-z]{2,}\b",
    // THE + word
    r"(?i)\bthe[ \t]+[a-z]{3,}\b",
    // long upper-case pairs
    r"\b[A-Z]{4,}[ \t]+[A-Z]{4,}\b",
];

/// Franchise titles matched straight against the raw dump with misreads baked
/// into the patterns.
pub struct FranchiseStrategy;

impl ExtractionStrategy for FranchiseStrategy {
    fn name(&self) -> &'static str {
        "franchise"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::Franchise
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        find_franchises(context.raw)
            .into_iter()
            .map(|found| found.title)
            .collect()
    }
}

/// Recombines two to four neighbouring tokens of a line into title-shaped phrases.
pub struct FragmentStrategy;

pub fn fragments(line: &str) -> Vec<String> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let token = TOKEN.get_or_init(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

    let tokens: Vec<&str> = token.find_iter(line).map(|m| m.as_str()).collect();
    let mut found = Vec::new();
    for start in 0..tokens.len() {
        for size in 2..=4 {
            let Some(window) = tokens.get(start..start + size) else {
                break;
            };
            let candidate = window.join(" ");
            if looks_like_title(&candidate) {
                found.push(candidate);
            }
        }
    }
    found
}

fn looks_like_title(candidate: &str) -> bool {
    let len = candidate.chars().count();
    (6..=30).contains(&len)
        && (count_game_words(candidate) > 0 || count_sequel_numerals(candidate) > 0)
        && !is_system_info(candidate)
}

impl ExtractionStrategy for FragmentStrategy {
    fn name(&self) -> &'static str {
        "fragment"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::Fragment
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        context.cleaned.lines().flat_map(fragments).collect()
    }
}

/// Generic title shapes, tried only when nothing else has been found.
pub struct StructuralStrategy;

fn structural_patterns() -> &'static Vec<Regex> {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        STRUCTURAL_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).unwrap())
            .collect()
    })
}

pub fn structural_matches(text: &str) -> Vec<String> {
    structural_patterns()
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

impl ExtractionStrategy for StructuralStrategy {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::Structural
    }

    fn should_execute(&self, context: &ExtractionContext) -> bool {
        context.collected.is_empty()
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        structural_matches(&context.cleaned)
    }
}
