use crate::{
    config::ClassifierConfig,
    rules::{junk::is_junk, patterns::matches_strong_pattern, system_info::is_system_info},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    StrongPattern,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutsideLengthWindow,
    SystemInfo,
    NoLetters,
    Noise,
    Junk,
    Shapeless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Acceptance),
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Decides whether a single cleaned line looks like a game title.
pub struct LineClassifier<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> LineClassifier<'a> {
    pub fn new(config: &'a ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn within_window(&self, line: &str) -> bool {
        let len = line.chars().count();
        len >= self.config.min_line_length && len <= self.config.max_line_length
    }

    pub fn classify(&self, line: &str) -> Verdict {
        let line = line.trim();
        if !self.within_window(line) {
            return Verdict::Rejected(Rejection::OutsideLengthWindow);
        }
        if is_system_info(line) {
            return Verdict::Rejected(Rejection::SystemInfo);
        }
        if !line.chars().any(|c| c.is_alphabetic()) {
            return Verdict::Rejected(Rejection::NoLetters);
        }
        // Curated title shapes are trusted outright: a match skips the noise
        // ratio and junk checks below on purpose.
        if matches_strong_pattern(line) {
            return Verdict::Accepted(Acceptance::StrongPattern);
        }
        if noise_ratio(line) > self.config.noise_ratio_limit() {
            return Verdict::Rejected(Rejection::Noise);
        }
        if is_junk(line) {
            return Verdict::Rejected(Rejection::Junk);
        }
        if has_title_shape(line) {
            Verdict::Accepted(Acceptance::Flexible)
        } else {
            Verdict::Rejected(Rejection::Shapeless)
        }
    }

    pub fn accepts(&self, line: &str) -> bool {
        let verdict = self.classify(line);
        if let Verdict::Rejected(reason) = verdict {
            tracing::trace!(line, ?reason, "Line rejected");
        }
        verdict.is_accepted()
    }
}

/// Share of characters that are neither alphanumeric nor whitespace.
pub fn noise_ratio(line: &str) -> f64 {
    let total = line.chars().count();
    if total == 0 {
        return 0.0;
    }
    let noise = line
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();
    noise as f64 / total as f64
}

fn has_title_shape(line: &str) -> bool {
    let words = line.split_whitespace().count();
    let len = line.chars().count();
    (words >= 1 && (4..=50).contains(&len)) || (words == 1 && len >= 5)
}
