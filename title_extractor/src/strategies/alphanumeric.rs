use core_types::CandidateOrigin;
use regex::Regex;
use std::sync::OnceLock;

use super::{ExtractionContext, ExtractionStrategy};
use crate::pipeline::best_title;

/// Longest alphanumeric run in the raw dump, put through the standard cleaner.
pub struct AlphanumericRunStrategy;

/// The longest run of at least three ASCII letters or digits. The first one
/// wins when several share the maximum length.
pub fn longest_run(raw: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]{3,}").unwrap());

    re.find_iter(raw)
        .map(|m| m.as_str())
        .fold(None, |best: Option<&str>, run| match best {
            Some(current) if current.len() >= run.len() => Some(current),
            _ => Some(run),
        })
}

impl ExtractionStrategy for AlphanumericRunStrategy {
    fn name(&self) -> &'static str {
        "alphanumeric_run"
    }

    fn origin(&self) -> CandidateOrigin {
        CandidateOrigin::AlphanumericRun
    }

    fn extract(&self, context: &ExtractionContext) -> Vec<String> {
        longest_run(context.raw)
            .and_then(|run| best_title(run, context.config))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;

    #[test]
    fn test_longest_run() {
        let test_cases = vec![
            ("57REE7 FI6H7ER ||", Some("FI6H7ER")),
            ("ab cd", None),
            ("abc def", Some("abc")),
            ("SEGA\nMaster System\nConsole", Some("Console")),
            ("", None),
        ];
        for (input, expected) in test_cases {
            assert_eq!(longest_run(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_alphanumeric_run_strategy() {
        let config = ExtractionConfig::default();
        let extract = |raw: &str| AlphanumericRunStrategy.extract(&ExtractionContext::new(raw, &config));
        assert_eq!(extract("** 5H1N0B1 **"), vec!["Shinobi"]);
        assert!(extract("SEGA\nMaster System\nConsole").is_empty());
    }
}
