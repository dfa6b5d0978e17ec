//! Independent ways of pulling title candidates out of one recognizer dump.
//!
//! Each strategy only reads the [`ExtractionContext`]; the variation generator
//! owns the collected results and decides what is kept.

use core_types::CandidateOrigin;

use crate::{config::ExtractionConfig, normalizer::normalize};

pub mod aggressive;
pub mod alphanumeric;
pub mod standard;
pub mod symbol_stripped;
pub mod uppercase_runs;

pub struct ExtractionContext<'a> {
    pub raw: &'a str,
    pub cleaned: String,
    pub config: &'a ExtractionConfig,
    /// Variations accepted so far, in the order they were found.
    pub collected: Vec<(String, CandidateOrigin)>,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(raw: &'a str, config: &'a ExtractionConfig) -> Self {
        Self {
            raw,
            cleaned: normalize(raw),
            config,
            collected: Vec::new(),
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.collected.iter().any(|(text, _)| text == candidate)
    }
}

/// One extraction strategy.
pub trait ExtractionStrategy {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    fn origin(&self) -> CandidateOrigin;

    /// Checked before `extract`. Strategies that return `false` are skipped.
    fn should_execute(&self, _context: &ExtractionContext) -> bool {
        true
    }

    /// Raw candidates in preference order. Validation, casing and
    /// de-duplication are left to the caller.
    fn extract(&self, context: &ExtractionContext) -> Vec<String>;
}

/// Strategies that always run.
pub fn normal_strategies() -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(standard::StandardStrategy),
        Box::new(uppercase_runs::UppercaseRunStrategy),
        Box::new(alphanumeric::AlphanumericRunStrategy),
        Box::new(symbol_stripped::SymbolStrippedStrategy),
    ]
}

/// Strategies tried only when the normal ones produced nothing.
pub fn recovery_strategies() -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(aggressive::FranchiseStrategy),
        Box::new(aggressive::FragmentStrategy),
        Box::new(aggressive::StructuralStrategy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_recovery_strategies_are_aggressive() {
        assert!(normal_strategies().iter().all(|s| !s.origin().is_aggressive()));
        assert!(recovery_strategies().iter().all(|s| s.origin().is_aggressive()));
    }
}
