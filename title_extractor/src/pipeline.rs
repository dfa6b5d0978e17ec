//! The standard single-title pipeline: normalize, classify lines, fall back to
//! recovery, score, select and format.

use core_types::CandidateOrigin;

use crate::{
    case::title_case,
    classifier::LineClassifier,
    config::ExtractionConfig,
    normalizer::normalize,
    recovery::RecoveryExtractor,
    scorer::{CandidateScorer, ScoredCandidate},
};

/// Candidate lines of already cleaned text, tagged with the tier that produced
/// them. Empty when neither the classifier nor recovery keeps anything.
pub fn candidate_lines<'s>(
    cleaned: &'s str,
    config: &ExtractionConfig,
) -> (Vec<&'s str>, CandidateOrigin) {
    let lines: Vec<&str> = cleaned.lines().map(str::trim).collect();

    let classifier = LineClassifier::new(&config.classifier);
    let accepted: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| classifier.accepts(line))
        .collect();
    if !accepted.is_empty() {
        return (accepted, CandidateOrigin::DirectLine);
    }

    tracing::debug!("No line passed the classifier, trying recovery");
    let recovery = RecoveryExtractor::new(&config.recovery);
    (recovery.recover(&lines), CandidateOrigin::Recovered)
}

/// Every candidate the standard pipeline considered, best first.
pub fn rank_candidates(raw: &str, config: &ExtractionConfig) -> Vec<ScoredCandidate> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let cleaned = normalize(raw);
    let (lines, origin) = candidate_lines(&cleaned, config);
    let scorer = CandidateScorer::new(&config.scoring);
    scorer.rank(
        lines
            .into_iter()
            .map(|line| (line.to_string(), origin))
            .collect(),
    )
}

/// Best single title for `raw`, or `None` when nothing survives recovery.
pub fn best_title(raw: &str, config: &ExtractionConfig) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    let cleaned = normalize(raw);
    let (lines, _) = candidate_lines(&cleaned, config);
    let scorer = CandidateScorer::new(&config.scoring);
    scorer
        .select_best(&lines)
        .map(|(best, _)| title_case(best))
}

pub fn clean_text_with(raw: &str, config: &ExtractionConfig) -> String {
    best_title(raw, config).unwrap_or_default()
}
