mod logging;
mod output;

use std::{
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use core_types::{OcrReading, Platform};
use title_extractor::{ExtractionConfig, TitleExtractor, TitleReport};

#[derive(Parser, Debug)]
#[command(name = "ocr-title", about = "Guess the game title from text recognized on a cover")]
struct Cli {
    /// Recognized text to read, stdin when omitted
    input_file: Option<PathBuf>,

    /// Treat the input as a JSON recognition result: {"text": "...", "confidence": 87.5}
    #[arg(long)]
    reading: bool,

    /// Skip extraction for readings below this confidence (0-100)
    #[arg(long, default_value_t = 0.0)]
    min_confidence: f32,

    /// JSON file overriding the extraction rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Platform printed on the case, overrides detection (e.g. "genesis", "PS2")
    #[arg(long, value_parser = parse_platform)]
    platform: Option<Platform>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also list every scored candidate line
    #[arg(long)]
    explain: bool,
}

fn parse_platform(value: &str) -> Result<Platform, String> {
    Platform::try_from(value).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => ExtractionConfig::from_file(path)?,
        None => ExtractionConfig::default(),
    };
    let extractor = TitleExtractor::with_config(config);

    let input = match &args.input_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let text = if args.reading {
        let reading: OcrReading = serde_json::from_str(&input)?;
        if !reading.meets_confidence(args.min_confidence) {
            tracing::warn!(
                confidence = reading.confidence,
                min_confidence = args.min_confidence,
                "Recognition confidence too low, skipping extraction"
            );
            None
        } else {
            Some(reading.text)
        }
    } else {
        Some(input)
    };

    let (report, candidates) = match &text {
        Some(text) => (
            extractor.extract(text),
            args.explain.then(|| extractor.rank_candidates(text)),
        ),
        None => (TitleReport::default(), None),
    };
    let report = match args.platform {
        Some(platform) => TitleReport {
            platform: Some(platform),
            ..report
        },
        None => report,
    };

    let rendered = if args.json {
        output::render_json(&report, candidates.as_deref())?
    } else {
        output::render_text(&report, candidates.as_deref())
    };
    print!("{}", rendered);
    if args.json {
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_flag() {
        let cli = Cli::try_parse_from(["ocr-title", "--platform", "genesis"]).unwrap();
        assert_eq!(cli.platform, Some(Platform::MegaDrive));

        assert!(Cli::try_parse_from(["ocr-title", "--platform", "Commodore 64"]).is_err());
    }

    #[test]
    fn test_reading_flags() {
        let cli = Cli::try_parse_from(["ocr-title", "--reading", "--min-confidence", "40", "scan.json"])
            .unwrap();
        assert!(cli.reading);
        assert_eq!(cli.min_confidence, 40.0);
        assert_eq!(cli.input_file, Some(PathBuf::from("scan.json")));
        assert_eq!(cli.platform, None);
    }
}
