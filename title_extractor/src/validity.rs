use crate::config::ValidityConfig;

/// Generic plausibility check for any extracted name.
pub fn is_valid_name_with(candidate: &str, config: &ValidityConfig) -> bool {
    let candidate = candidate.trim();
    let len = candidate.chars().count();
    if len < config.min_length || len > config.max_length {
        return false;
    }
    if candidate.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return false;
    }
    if !candidate.chars().any(|c| c.is_alphabetic()) {
        return false;
    }

    let symbols = candidate
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();
    symbols as f64 / len as f64 <= config.max_symbol_ratio
}
