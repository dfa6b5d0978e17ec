use crate::{config::RecoveryConfig, rules::system_info::is_system_info};

/// Looser line filter used once the classifier has rejected every line.
pub struct RecoveryExtractor<'a> {
    config: &'a RecoveryConfig,
}

impl<'a> RecoveryExtractor<'a> {
    pub fn new(config: &'a RecoveryConfig) -> Self {
        Self { config }
    }

    pub fn accepts(&self, line: &str) -> bool {
        let line = line.trim();
        let len = line.chars().count();
        line.chars().any(|c| c.is_alphabetic())
            && len >= self.config.min_length
            && len <= self.config.max_length
            && !is_system_info(line)
            && !is_numeric(line)
    }

    pub fn recover<'s>(&self, lines: &[&'s str]) -> Vec<&'s str> {
        let recovered: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| self.accepts(line))
            .collect();
        tracing::debug!(count = recovered.len(), "Recovered lines");
        recovered
    }
}

fn is_numeric(line: &str) -> bool {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '-' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_accepts() {
        let config = RecoveryConfig::default();
        let extractor = RecoveryExtractor::new(&config);
        let test_cases = vec![
            ("Ab.", true),
            ("a'.-:(", true),
            ("MIS", true),
            ("Ab", false),
            ("SEGA", false),
            ("Master System", false),
            ("1998", false),
            ("12:30", false),
            ("An unusually long line that keeps going on and on", false),
        ];
        for (input, expected) in test_cases {
            assert_eq!(extractor.accepts(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_recover_keeps_order() {
        let config = RecoveryConfig::default();
        let extractor = RecoveryExtractor::new(&config);
        let lines = vec!["SEGA", "ee.", "1998", "Mis"];
        assert_eq!(extractor.recover(&lines), vec!["ee.", "Mis"]);
    }
}
