use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TitleExtractorError;

/// How strictly the line classifier treats punctuation noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    /// Tolerant of stylized lettering, the default for cover scans.
    #[default]
    Flexible,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub mode: ClassifierMode,
    /// Inclusive bounds a line must fall in before it is classified at all.
    pub min_line_length: usize,
    pub max_line_length: usize,
    pub flexible_noise_ratio: f64,
    pub strict_noise_ratio: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassifierMode::Flexible,
            min_line_length: 2,
            max_line_length: 60,
            flexible_noise_ratio: 0.6,
            strict_noise_ratio: 0.4,
        }
    }
}

impl ClassifierConfig {
    pub fn noise_ratio_limit(&self) -> f64 {
        match self.mode {
            ClassifierMode::Flexible => self.flexible_noise_ratio,
            ClassifierMode::Strict => self.strict_noise_ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 40,
        }
    }
}

/// Additive weights used to rank title candidates.
///
/// The defaults were tuned by hand against real cover scans. Only the ordering
/// they produce is meaningful, not the absolute numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub famous_game: f64,
    pub word_length: f64,
    pub uppercase_letter: f64,
    pub sequel_numeral: f64,
    pub length_window: f64,
    pub tight_length_window: f64,
    pub game_vocabulary: f64,
    pub system_info_penalty: f64,
    pub fragmentation_penalty: f64,
    pub max_words_before_penalty: usize,
    pub compact_word_count: f64,
    pub sequel_pattern: f64,
    pub weird_char_penalty: f64,
    pub weird_char_tolerance: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            famous_game: 15.0,
            word_length: 3.0,
            uppercase_letter: 0.5,
            sequel_numeral: 8.0,
            length_window: 5.0,
            tight_length_window: 3.0,
            game_vocabulary: 6.0,
            system_info_penalty: 25.0,
            fragmentation_penalty: 1.0,
            max_words_before_penalty: 7,
            compact_word_count: 4.0,
            sequel_pattern: 8.0,
            weird_char_penalty: 2.0,
            weird_char_tolerance: 2,
        }
    }
}

/// Weights for picking the best all-caps run out of a logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoRunWeights {
    pub system_info_penalty: f64,
    pub game_vocabulary: f64,
    pub length_window: f64,
    pub sequel_marker: f64,
    pub word: f64,
    pub short_run_penalty: f64,
}

impl Default for LogoRunWeights {
    fn default() -> Self {
        Self {
            system_info_penalty: 25.0,
            game_vocabulary: 6.0,
            length_window: 5.0,
            sequel_marker: 8.0,
            word: 2.0,
            short_run_penalty: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub max_symbol_ratio: f64,
}

impl Default for ValidityConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 100,
            max_symbol_ratio: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub classifier: ClassifierConfig,
    pub recovery: RecoveryConfig,
    pub scoring: ScoringWeights,
    pub logo: LogoRunWeights,
    pub validity: ValidityConfig,
    pub max_variations: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            recovery: RecoveryConfig::default(),
            scoring: ScoringWeights::default(),
            logo: LogoRunWeights::default(),
            validity: ValidityConfig::default(),
            max_variations: 5,
        }
    }
}

impl ExtractionConfig {
    /// Parse a JSON document. Missing sections and fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TitleExtractorError> {
        let config: ExtractionConfig = serde_json::from_str(json)
            .map_err(|e| TitleExtractorError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, TitleExtractorError> {
        let json = std::fs::read_to_string(path).map_err(|e| TitleExtractorError::ConfigIo {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "Loaded extraction config");
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), TitleExtractorError> {
        check_bounds(
            "classifier line length",
            self.classifier.min_line_length,
            self.classifier.max_line_length,
        )?;
        check_bounds(
            "recovery length",
            self.recovery.min_length,
            self.recovery.max_length,
        )?;
        check_bounds(
            "validity length",
            self.validity.min_length,
            self.validity.max_length,
        )?;
        check_ratio("flexible_noise_ratio", self.classifier.flexible_noise_ratio)?;
        check_ratio("strict_noise_ratio", self.classifier.strict_noise_ratio)?;
        check_ratio("max_symbol_ratio", self.validity.max_symbol_ratio)?;
        if self.max_variations == 0 {
            return Err(TitleExtractorError::InvalidConfig(
                "max_variations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_bounds(name: &str, min: usize, max: usize) -> Result<(), TitleExtractorError> {
    if min > max {
        return Err(TitleExtractorError::InvalidConfig(format!(
            "{} minimum {} is greater than maximum {}",
            name, min, max
        )));
    }
    Ok(())
}

fn check_ratio(name: &str, value: f64) -> Result<(), TitleExtractorError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(TitleExtractorError::InvalidConfig(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}
