use core_types::CandidateOrigin;
use regex::Regex;
use std::sync::OnceLock;

use super::{ExtractionContext, ExtractionStrategy};
use crate::{
    config::LogoRunWeights,
    rules::{
        patterns::{count_game_words, count_sequel_numerals},
        system_info::is_system_info,
    },
};

/// Picks the best all-caps run out of the cleaned text, which is how logos
/// usually come out of the recognizer.
pub struct UppercaseRunStrategy;

fn uppercase_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][A-Z0-9'\-]+(?:[ \t]+[A-Z0-9][A-Z0-9'\-]+)*(?:[ \t]+(?:[IVX]{1,4}|GP|[2-9]))?\b")
            .unwrap()
    })
}

/// Score of one run under the logo weights. Runs scoring zero or less are
/// never used.
pub fn score_run(run: &str, weights: &LogoRunWeights) -> f64 {
    let len = run.chars().count();
    let words = run.split_whitespace().count();
    let mut score = 0.0;

    if is_system_info(run) {
        score -= weights.system_info_penalty;
    }
    score += weights.game_vocabulary * count_game_words(run) as f64;
    if (6..=30).contains(&len) {
        score += weights.length_window;
    }
    if count_sequel_numerals(run) > 0 || run.ends_with(" GP") {
        score += weights.sequel_marker;
    }
    score += weights.word * words as f64;
    if len < 4 {
        score -= weights.short_run_penalty;
    }
    score
}

impl ExtractionStrategy for UppercaseRunStrategy {
    fn name(&self) -> &'static str {
        "uppercase_runs"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::UppercaseRun
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        let weights = &context.config.logo;
        let mut best: Option<(&str, f64)> = None;
        for line in context.cleaned.lines() {
            for run in uppercase_run().find_iter(line) {
                let score = score_run(run.as_str(), weights);
                tracing::trace!(run = run.as_str(), score, "Scored uppercase run");
                if score <= 0.0 {
                    continue;
                }
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((run.as_str(), score)),
                }
            }
        }
        best.map(|(run, _)| run.to_string()).into_iter().collect()
    }
}
