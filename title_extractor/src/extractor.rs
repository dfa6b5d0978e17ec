use core_types::Platform;
use serde::Serialize;

use crate::{
    config::ExtractionConfig,
    pipeline,
    platform::detect_platform,
    scorer::ScoredCandidate,
    validity::is_valid_name_with,
    variations::VariationGenerator,
};

/// Everything a cover scan can tell about the game on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TitleReport {
    pub title: Option<String>,
    pub variations: Vec<String>,
    pub platform: Option<Platform>,
}

impl TitleReport {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.variations.is_empty()
    }
}

/// Title extraction with a fixed configuration. Holds no other state, so one
/// instance can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct TitleExtractor {
    config: ExtractionConfig,
}

impl TitleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Best single title, or an empty string when nothing usable was found.
    pub fn clean_text(&self, raw: &str) -> String {
        pipeline::clean_text_with(raw, &self.config)
    }

    pub fn generate_variations(&self, raw: &str) -> Vec<String> {
        VariationGenerator::new(&self.config).generate(raw)
    }

    pub fn is_valid_name(&self, candidate: &str) -> bool {
        is_valid_name_with(candidate, &self.config.validity)
    }

    pub fn rank_candidates(&self, raw: &str) -> Vec<ScoredCandidate> {
        pipeline::rank_candidates(raw, &self.config)
    }

    pub fn detect_platform(&self, raw: &str) -> Option<Platform> {
        detect_platform(raw)
    }

    pub fn extract(&self, raw: &str) -> TitleReport {
        let title = pipeline::best_title(raw, &self.config);
        let variations = self.generate_variations(raw);
        let platform = self.detect_platform(raw);
        tracing::info!(
            title = title.as_deref().unwrap_or(""),
            variations = variations.len(),
            platform = platform.map(|p| p.to_string()).as_deref().unwrap_or(""),
            "Extracted title"
        );
        TitleReport {
            title,
            variations,
            platform,
        }
    }
}
