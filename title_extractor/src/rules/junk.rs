use regex::Regex;
use std::sync::OnceLock;

/// Lines that are never a title on their own, checked against the whole line.
const JUNK_PATTERNS: &[&str] = &[
    // numbers, prices without a currency word, dates
    r"^[\d\s.,:/\-]+$",
    // a lone lowercase letter
    r"^[a-z]$",
    // generic media words alone
    r"(?i)^(?:version|edition|video|console|cartridge|disc|cd|rom)$",
    // bare stopwords
    r"(?i)^(?:the|a|an|and|or|in|on|at|to|for|of|with|by)$",
];

const COMMERCE_PATTERN: &str = r"(?i)[$€£]|\b(?:price|cost|usd|eur|gbp|brl|condition|seller|feedback|shipping|ebay|amazon|paypal)\b";

fn junk_patterns() -> &'static Vec<Regex> {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        JUNK_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).unwrap())
            .collect()
    })
}

/// Marketplace and listing vocabulary: prices, sellers, shipping.
pub fn is_commerce(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(COMMERCE_PATTERN).unwrap());

    re.is_match(line)
}

pub fn is_junk(line: &str) -> bool {
    let line = line.trim();
    is_commerce(line) || junk_patterns().iter().any(|re| re.is_match(line))
}
