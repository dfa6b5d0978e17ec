use std::fmt::Write;

use title_extractor::{ScoredCandidate, TitleReport};

pub fn render_text(report: &TitleReport, candidates: Option<&[ScoredCandidate]>) -> String {
    let mut out = String::new();
    match &report.title {
        Some(title) => writeln!(out, "Title: {}", title).ok(),
        None => writeln!(out, "No title found, enter it manually").ok(),
    };
    if let Some(platform) = report.platform {
        writeln!(out, "Platform: {}", platform).ok();
    }
    if !report.variations.is_empty() {
        writeln!(out, "Variations:").ok();
        for (i, variation) in report.variations.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, variation).ok();
        }
    }
    if let Some(candidates) = candidates {
        writeln!(out, "Candidates:").ok();
        for candidate in candidates {
            writeln!(
                out,
                "  {:>7.1}  {:<16}  {}",
                candidate.score,
                candidate.origin.to_string(),
                candidate.text
            )
            .ok();
        }
    }
    out
}

pub fn render_json(
    report: &TitleReport,
    candidates: Option<&[ScoredCandidate]>,
) -> Result<String, serde_json::Error> {
    match candidates {
        Some(candidates) => serde_json::to_string_pretty(&serde_json::json!({
            "report": report,
            "candidates": candidates,
        })),
        None => serde_json::to_string_pretty(report),
    }
}
