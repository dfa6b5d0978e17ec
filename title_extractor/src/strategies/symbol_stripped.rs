use core_types::CandidateOrigin;

use super::{ExtractionContext, ExtractionStrategy};
use crate::rules::{junk::is_commerce, system_info::is_system_info};

const MAX_WORDS: usize = 4;
const MAX_CHARS: usize = 30;

/// Each cleaned line with every non-word character removed, cut down to a short
/// title-sized phrase.
pub struct SymbolStrippedStrategy;

pub fn strip_symbols(line: &str) -> Option<String> {
    let spaced: String = line
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in spaced
        .split_whitespace()
        .filter(|w| w.chars().count() >= 2 && w.chars().any(|c| c.is_alphabetic()))
    {
        let added = word.chars().count() + usize::from(!kept.is_empty());
        if kept.len() == MAX_WORDS || length + added > MAX_CHARS {
            break;
        }
        kept.push(word);
        length += added;
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

impl ExtractionStrategy for SymbolStrippedStrategy {
    fn name(&self) -> &'static str {
        "symbol_stripped"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::SymbolStripped
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        context
            .cleaned
            .lines()
            .filter(|line| !is_system_info(line) && !is_commerce(line))
            .filter_map(strip_symbols)
            .collect()
    }
}
