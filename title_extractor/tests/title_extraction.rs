use std::collections::HashSet;
use std::io::Write;

use core_types::{CandidateOrigin, Platform};
use tempfile::NamedTempFile;
use title_extractor::{
    ExtractionConfig, TitleExtractor, clean_text, detect_platform, extract, generate_variations,
    is_valid_name, normalizer::normalize, rank_candidates,
};

const SYSTEM_ONLY: &str = "SEGA\nMaster System\nConsole";

const COVER_SCANS: &[&str] = &[
    "5UP ER MON ACO 6P ||",
    "57REE7 FI6H7ER ||",
    "50N1C 7HE HED6EH06",
    "F1N4L F4N745Y V1",
    "DRA60N *QUE57* |||",
    "5UP€R M4R10 8R05",
    "SEGA\n    Ma5ter 5y5tem\n    M0N4C0 6P",
    ": 5ema 8 M@N4C0 6P || sema We) ee MIS",
    "F1N4L F4N745Y",
    "5 U P E R   M O N 4 C 0   6 P   | |",
    "SEGA\nSONIC THE HEDGEHOG\nGENESIS\nPrice: R$ 150,00\nSeller: retrogamer",
    SYSTEM_ONLY,
];

fn awkward_inputs() -> Vec<String> {
    vec![
        String::new(),
        " \t\n\r\n ".to_string(),
        "@#$%^&*".to_string(),
        "||||||||||||".to_string(),
        "ドラゴンクエスト III".to_string(),
        "Ωμέγα Σύστημα".to_string(),
        "🎮🎮🎮 SONIC 🎮".to_string(),
        "\u{0}\u{1}\u{7f}".to_string(),
        "A ".repeat(5_000),
        "5UPER M0NACO 6P ".repeat(500),
        "x\n".repeat(2_000),
    ]
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert_eq!(clean_text(""), "");
    assert!(generate_variations("").is_empty());
    assert!(rank_candidates("").is_empty());
    assert_eq!(detect_platform(""), None);
    assert!(extract("   ").is_empty());
}

#[test]
fn test_awkward_input_does_not_panic() {
    for input in awkward_inputs() {
        let _ = clean_text(&input);
        let _ = generate_variations(&input);
        let _ = detect_platform(&input);
    }
}

#[test]
fn test_extraction_is_deterministic() {
    for input in COVER_SCANS {
        assert_eq!(clean_text(input), clean_text(input));
        assert_eq!(generate_variations(input), generate_variations(input));
        assert_eq!(extract(input), extract(input));
    }
}

#[test]
fn test_variations_are_bounded_and_distinct() {
    let inputs = COVER_SCANS
        .iter()
        .map(|s| s.to_string())
        .chain(awkward_inputs())
        .chain(std::iter::once(
            "Golden Axe\nAlien Storm\nShadow Dancer\nBonanza Bros\nKid Chameleon\nEcco\nToejam".to_string(),
        ));
    for input in inputs {
        let variations = generate_variations(&input);
        assert!(variations.len() <= 5, "too many variations for {:?}", input);
        let unique: HashSet<&String> = variations.iter().collect();
        assert_eq!(unique.len(), variations.len(), "duplicates for {:?}", input);
        assert!(variations.iter().all(|v| is_valid_name(v)));
    }
}

#[test]
fn test_system_lines_are_never_the_answer() {
    let lines: Vec<&str> = SYSTEM_ONLY.lines().collect();
    let title = clean_text(SYSTEM_ONLY);
    assert!(!lines.contains(&title.as_str()), "got {}", title);
    for variation in generate_variations(SYSTEM_ONLY) {
        assert!(!lines.contains(&variation.as_str()), "got {}", variation);
    }
}

#[test]
fn test_sequel_numeral_is_kept() {
    assert_eq!(clean_text("SUPER MONACO GP II"), "Super Monaco GP II");
    assert_eq!(clean_text("STREETS OF RAGE 2"), "Streets of Rage 2");
    assert_eq!(clean_text("DRA60N *QUE57* |||"), "Dragon Quest III");
}

#[test]
fn test_corrupted_logo_is_recovered() {
    let test_cases = vec![
        ("57REE7 FI6H7ER ||", "Street Fighter II"),
        ("50N1C 7HE HED6EH06", "Sonic the Hedgehog"),
        ("F1N4L F4N745Y V1", "Final Fantasy VI"),
        ("5UP€R M4R10 8R05", "Super Mario Bros"),
        ("SEGA\n    Ma5ter 5y5tem\n    M0N4C0 6P", "Monaco GP"),
        ("5 U P E R   M O N 4 C 0   6 P   | |", "Super Monaco GP II"),
        ("S O N I C   T H E   H E D G E H O G", "Sonic the Hedgehog"),
    ];
    for (input, expected) in test_cases {
        assert_eq!(clean_text(input), expected, "input {:?}", input);
        assert_eq!(
            generate_variations(input).first().map(String::as_str),
            Some(expected),
            "input {:?}",
            input
        );
    }

    let title = clean_text("57REE7 FI6H7ER ||").to_lowercase();
    assert!(title.contains("street") && title.contains("fighter"));
}

#[test]
fn test_franchise_patterns_rescue_unreadable_lines() {
    assert_eq!(generate_variations("S-O-N-I-C"), vec!["Sonic"]);
}

#[test]
fn test_is_valid_name() {
    let test_cases = vec![
        ("12345", false),
        ("Final Fantasy", true),
        ("@#$%^&*", false),
        ("Ab", false),
        ("Streets of Rage 2", true),
    ];
    for (input, expected) in test_cases {
        assert_eq!(is_valid_name(input), expected, "input {}", input);
    }
}

#[test]
fn test_normalizer_is_idempotent() {
    for input in COVER_SCANS.iter().map(|s| s.to_string()).chain(awkward_inputs()) {
        let once = normalize(&input);
        assert_eq!(normalize(&once), once, "input {:?}", input);
    }
}

#[test]
fn test_marketplace_listing_scan() {
    let raw = "SEGA\nSONIC THE HEDGEHOG\nGENESIS\nPrice: R$ 150,00\nSeller: retrogamer";
    let report = extract(raw);
    assert_eq!(report.title.as_deref(), Some("Sonic the Hedgehog"));
    assert_eq!(report.platform, Some(Platform::MegaDrive));
    assert!(
        report
            .variations
            .iter()
            .all(|v| !v.to_lowercase().contains("price") && !v.to_lowercase().contains("seller"))
    );
}

#[test]
fn test_known_franchise_outranks_plain_line() {
    let ranked = rank_candidates("Bright Harbor II\nStreet Fighter II");
    assert_eq!(ranked[0].text, "Street Fighter II");
    assert!(ranked.iter().all(|c| c.origin == CandidateOrigin::DirectLine));
}

#[test]
fn test_extractor_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "max_variations": 1, "classifier": {{ "mode": "strict" }} }}"#
    )
    .unwrap();

    let config = ExtractionConfig::from_file(file.path()).unwrap();
    let extractor = TitleExtractor::with_config(config);
    let variations =
        extractor.generate_variations("Golden Axe\nAlien Storm\nShadow Dancer\nBonanza Bros");
    assert_eq!(variations.len(), 1);
}
