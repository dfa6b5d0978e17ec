//! Game-title pattern tables shared by the classifier and the scorers.

use regex::Regex;
use std::sync::OnceLock;

/// High-confidence title shapes. A line matching any of these is accepted by the
/// classifier without the noise and junk checks.
pub const STRONG_PATTERNS: &[&str] = &[
    // franchise stems
    r"(?i)\b(?:super\s*mario|mario\s*kart|zelda|sonic|street\s*fighter|final\s*fantasy|dragon\s*(?:quest|ball)|mega\s*man|castlevania|metroid|monaco|alex\s*kidd|phantasy\s*star|wonder\s*boy|golden\s*axe|streets\s*of\s*rage|mortal\s*kombat|donkey\s*kong|pokemon|gran\s*turismo|soul\s*calibur|tekken|resident\s*evil|metal\s*gear|shinobi|out\s*run)\b",
    // word(s) + sequel numeral
    r"(?i)^[a-z]{3,}(?:\s+[a-z]+)*\s+(?:ii|iii|iv|v|vi|vii|viii|ix|x|[2-9]|10)$",
    // word word + genre
    r"(?i)^[a-z]+\s+[a-z]+\s+(?:gp|racing|combat|adventure|quest|fighter|soccer|football|tennis|golf|wrestling|rally)\b",
    // leading article or hype prefix
    r"(?i)^(?:the|super|mega|ultra|hyper)\s+[a-z]{3,}",
    // word + collective suffix
    r"(?i)\b[a-z]{3,}\s+(?:force|power|warriors|fighters|legends|chronicles|heroes|zone|wars)\b",
];

/// Well known titles, sequel aware. Any match earns the famous-game bonus once.
pub const FAMOUS_GAMES: &[&str] = &[
    r"(?i)\bsuper\s+monaco(?:\s+gp)?(?:\s+ii)?\b",
    r"(?i)\bmonaco\s+gp\b",
    r"(?i)\bsonic(?:\s+the)?\s+hedgehog\b",
    r"(?i)\bstreet\s+fighter(?:\s+ii)?\b",
    r"(?i)\bfinal\s+fantasy(?:\s+[ivx]+)?\b",
    r"(?i)\bdragon\s+quest(?:\s+[ivx]+)?\b",
    r"(?i)\bsuper\s+mario(?:\s+bros)?\b",
    r"(?i)\b(?:legend\s+of\s+)?zelda\b",
    r"(?i)\bgrand\s+(?:prix|turismo)\b",
];

/// Sequel-shaped phrases. Every match earns the sequel-pattern bonus.
pub const SEQUEL_PATTERNS: &[&str] = &[
    r"(?i)\b[a-z]+\s+[a-z]+\s+(?:ii|iii|iv|v|vi|[2-9]|10)\b",
    r"(?i)\b(?:super|grand|final)\s+[a-z]+(?:\s+[a-z]+)?",
    r"(?i)\b[a-z]+\s+(?:gp|racing|fighter|fantasy|quest)\b",
];

const SEQUEL_NUMERAL: &str = r"(?i)\b(?:ii|iii|iv|v|vi|vii|viii|ix|x|[2-9]|10)\b";

pub const GAME_VOCABULARY: &[&str] = &[
    "super", "final", "street", "sonic", "mario", "zelda", "pokemon", "dragon", "fantasy",
    "legend", "monaco", "grand", "racing", "gp", "combat", "quest", "adventure", "saga", "world",
    "land", "fighter", "turismo", "prix", "hedgehog",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

pub fn strong_patterns() -> &'static Vec<Regex> {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(STRONG_PATTERNS))
}

pub fn famous_games() -> &'static Vec<Regex> {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(FAMOUS_GAMES))
}

pub fn sequel_patterns() -> &'static Vec<Regex> {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(SEQUEL_PATTERNS))
}

pub fn sequel_numeral() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEQUEL_NUMERAL).unwrap())
}

pub fn matches_strong_pattern(line: &str) -> bool {
    strong_patterns().iter().any(|re| re.is_match(line))
}

pub fn is_famous_game(s: &str) -> bool {
    famous_games().iter().any(|re| re.is_match(s))
}

pub fn count_sequel_numerals(s: &str) -> usize {
    sequel_numeral().find_iter(s).count()
}

/// Number of words in `s` that appear in [`GAME_VOCABULARY`].
pub fn count_game_words(s: &str) -> usize {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .filter(|w| GAME_VOCABULARY.contains(&w.to_lowercase().as_str()))
        .count()
}
