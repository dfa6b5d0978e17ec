use core_types::CandidateOrigin;

use super::{ExtractionContext, ExtractionStrategy};
use crate::pipeline::best_title;

/// The standard pipeline over the whole dump, then over each input line on its
/// own so that a title sharing the dump with a stronger line still surfaces.
pub struct StandardStrategy;

impl ExtractionStrategy for StandardStrategy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::DirectLine
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        let mut candidates: Vec<String> = best_title(context.raw, context.config)
            .into_iter()
            .collect();
        if context.raw.lines().count() > 1 {
            candidates.extend(
                context
                    .raw
                    .lines()
                    .filter_map(|line| best_title(line, context.config)),
            );
        }
        candidates
    }
}
