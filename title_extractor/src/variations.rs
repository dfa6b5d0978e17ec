use crate::{
    case::title_case,
    config::ExtractionConfig,
    rules::{junk::is_commerce, system_info::is_system_info},
    scorer::{CandidateScorer, ScoredCandidate},
    strategies::{
        ExtractionContext, ExtractionStrategy, normal_strategies, recovery_strategies,
    },
    validity::is_valid_name_with,
};

/// Runs every extraction strategy over one dump and ranks what they found.
pub struct VariationGenerator<'a> {
    config: &'a ExtractionConfig,
}

impl<'a> VariationGenerator<'a> {
    pub fn new(config: &'a ExtractionConfig) -> Self {
        Self { config }
    }

    /// Up to `max_variations` distinct titles, best first.
    pub fn generate(&self, raw: &str) -> Vec<String> {
        self.ranked(raw)
            .into_iter()
            .map(|candidate| candidate.text)
            .collect()
    }

    pub fn ranked(&self, raw: &str) -> Vec<ScoredCandidate> {
        if raw.trim().is_empty() {
            return Vec::new();
        }

        let mut context = ExtractionContext::new(raw, self.config);
        self.run(&normal_strategies(), &mut context);
        if context.collected.is_empty() {
            tracing::debug!("Normal strategies found nothing, running recovery strategies");
            self.run(&recovery_strategies(), &mut context);
        }

        let scorer = CandidateScorer::new(&self.config.scoring);
        let mut ranked = scorer.rank(context.collected);
        ranked.truncate(self.config.max_variations);
        tracing::debug!(count = ranked.len(), "Generated variations");
        ranked
    }

    fn run(&self, strategies: &[Box<dyn ExtractionStrategy>], context: &mut ExtractionContext) {
        for strategy in strategies {
            if !strategy.should_execute(context) {
                tracing::debug!(strategy = strategy.name(), "Strategy skipped");
                continue;
            }

            let mut added = 0;
            for candidate in strategy.extract(context) {
                let title = title_case(&candidate);
                if !self.accepts(&title) || context.contains(&title) {
                    continue;
                }
                context.collected.push((title, strategy.origin()));
                added += 1;
            }
            tracing::debug!(
                strategy = strategy.name(),
                aggressive = strategy.origin().is_aggressive(),
                added,
                "Strategy finished"
            );
        }
    }

    fn accepts(&self, candidate: &str) -> bool {
        is_valid_name_with(candidate, &self.config.validity)
            && !is_system_info(candidate)
            && !is_commerce(candidate)
    }
}
