//! Reconstructs game titles from noisy text recognized on game cases,
//! cartridges and discs.
//!
//! The free functions use [`ExtractionConfig::default`]; build a
//! [`TitleExtractor`] to tune the rules. Extraction never fails: unusable input
//! gives an empty string, an empty list or `None`.

pub mod case;
pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod pipeline;
pub mod platform;
pub mod recovery;
pub mod rules;
pub mod scorer;
pub mod strategies;
pub mod validity;
pub mod variations;

use core_types::Platform;

pub use config::ExtractionConfig;
pub use error::TitleExtractorError;
pub use extractor::{TitleExtractor, TitleReport};
pub use scorer::ScoredCandidate;

/// Best single title for `raw`, or `""`.
pub fn clean_text(raw: &str) -> String {
    pipeline::clean_text_with(raw, &ExtractionConfig::default())
}

/// Up to five distinct title guesses, best first.
pub fn generate_variations(raw: &str) -> Vec<String> {
    variations::VariationGenerator::new(&ExtractionConfig::default()).generate(raw)
}

pub fn is_valid_name(candidate: &str) -> bool {
    validity::is_valid_name_with(candidate, &ExtractionConfig::default().validity)
}

pub fn detect_platform(raw: &str) -> Option<Platform> {
    platform::detect_platform(raw)
}

pub fn rank_candidates(raw: &str) -> Vec<ScoredCandidate> {
    pipeline::rank_candidates(raw, &ExtractionConfig::default())
}

pub fn extract(raw: &str) -> TitleReport {
    TitleExtractor::new().extract(raw)
}
