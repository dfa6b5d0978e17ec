use core_types::CandidateOrigin;
use serde::Serialize;

use crate::{
    config::ScoringWeights,
    rules::{
        patterns::{count_game_words, count_sequel_numerals, is_famous_game, sequel_patterns},
        system_info::is_system_info,
    },
};

const ALLOWED_PUNCTUATION: &[char] = &['-', ':', '\'', '(', ')', '&', '.'];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub text: String,
    pub score: f64,
    pub origin: CandidateOrigin,
}

/// Additive quality score for title candidates.
pub struct CandidateScorer<'a> {
    weights: &'a ScoringWeights,
}

impl<'a> CandidateScorer<'a> {
    pub fn new(weights: &'a ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, candidate: &str) -> f64 {
        let w = self.weights;
        let candidate = candidate.trim();
        let words: Vec<&str> = candidate.split_whitespace().collect();
        let len = candidate.chars().count();
        let mut score = 0.0;

        if is_famous_game(candidate) {
            score += w.famous_game;
        }

        let sized_words = words
            .iter()
            .filter(|word| (3..=12).contains(&word.chars().count()))
            .count();
        score += w.word_length * sized_words as f64;

        let uppercase = candidate.chars().filter(|c| c.is_uppercase()).count();
        score += w.uppercase_letter * uppercase as f64;

        score += w.sequel_numeral * count_sequel_numerals(candidate) as f64;

        if (8..=35).contains(&len) {
            score += w.length_window;
        }
        if (12..=25).contains(&len) {
            score += w.tight_length_window;
        }

        score += w.game_vocabulary * count_game_words(candidate) as f64;

        if is_system_info(candidate) {
            score -= w.system_info_penalty;
        }

        let extra_words = words.len().saturating_sub(w.max_words_before_penalty);
        score -= w.fragmentation_penalty * extra_words as f64;

        if (2..=5).contains(&words.len()) {
            score += w.compact_word_count;
        }

        let sequel_matches: usize = sequel_patterns()
            .iter()
            .map(|re| re.find_iter(candidate).count())
            .sum();
        score += w.sequel_pattern * sequel_matches as f64;

        let weird = candidate.chars().filter(|c| is_weird(*c)).count();
        let excess = weird.saturating_sub(w.weird_char_tolerance);
        score -= w.weird_char_penalty * excess as f64;

        score
    }

    pub fn scored(&self, candidate: &str, origin: CandidateOrigin) -> ScoredCandidate {
        ScoredCandidate {
            text: candidate.to_string(),
            score: self.score(candidate),
            origin,
        }
    }

    /// Scores and sorts best-first. Equal scores keep their input order.
    pub fn rank(&self, candidates: Vec<(String, CandidateOrigin)>) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|(text, origin)| self.scored(&text, origin))
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// The first candidate reaching the highest score, even when every score is
    /// negative. `None` only for an empty list.
    pub fn select_best<'c>(&self, candidates: &[&'c str]) -> Option<(&'c str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for &candidate in candidates {
            let score = self.score(candidate);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
        if let Some((text, score)) = best {
            tracing::debug!(candidate = text, score, "Selected best candidate");
        }
        best
    }
}

fn is_weird(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_' || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c))
}
