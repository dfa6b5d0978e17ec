use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub mod platform;

pub use platform::Platform;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreTypeError {
    ConversionError(String),
    InvalidConfidence(f32),
}

impl std::fmt::Display for CoreTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreTypeError::ConversionError(msg) => write!(f, "Conversion Error: {}", msg),
            CoreTypeError::InvalidConfidence(value) => {
                write!(f, "Invalid confidence {}, expected 0-100", value)
            }
        }
    }
}

impl std::error::Error for CoreTypeError {}

/// Output of the external recognition engine for one captured image.
///
/// Only `text` is fed into title extraction. `confidence` (0-100) is for the
/// caller to decide whether extraction is worth attempting at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOcrReading")]
pub struct OcrReading {
    pub text: String,
    pub confidence: f32,
}

#[derive(Deserialize)]
struct RawOcrReading {
    text: String,
    #[serde(default)]
    confidence: f32,
}

impl TryFrom<RawOcrReading> for OcrReading {
    type Error = CoreTypeError;

    fn try_from(raw: RawOcrReading) -> Result<Self, Self::Error> {
        OcrReading::new(raw.text, raw.confidence)
    }
}

impl OcrReading {
    pub fn new(text: impl Into<String>, confidence: f32) -> Result<Self, CoreTypeError> {
        if !(0.0..=100.0).contains(&confidence) {
            return Err(CoreTypeError::InvalidConfidence(confidence));
        }
        Ok(Self {
            text: text.into(),
            confidence,
        })
    }

    pub fn meets_confidence(&self, min_confidence: f32) -> bool {
        self.confidence >= min_confidence
    }
}

/// Which extraction strategy produced a title candidate.
#[derive(Debug, Clone, PartialEq, Copy, Display, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateOrigin {
    #[strum(serialize = "Direct Line")]
    DirectLine,
    Recovered,
    #[strum(serialize = "Uppercase Run")]
    UppercaseRun,
    #[strum(serialize = "Alphanumeric Run")]
    AlphanumericRun,
    #[strum(serialize = "Symbol Stripped")]
    SymbolStripped,
    Franchise,
    Fragment,
    Structural,
}

impl CandidateOrigin {
    /// Origins produced by the recovery tier of variation generation.
    pub fn is_aggressive(&self) -> bool {
        matches!(
            self,
            CandidateOrigin::Franchise | CandidateOrigin::Fragment | CandidateOrigin::Structural
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_reading_confidence_bounds() {
        assert!(OcrReading::new("SONIC", 87.5).is_ok());
        assert_eq!(
            OcrReading::new("SONIC", 101.0),
            Err(CoreTypeError::InvalidConfidence(101.0))
        );
        assert!(OcrReading::new("SONIC", -1.0).is_err());
    }

    #[test]
    fn test_ocr_reading_deserialize_without_confidence() {
        let reading: OcrReading = serde_json::from_str(r#"{"text":"SUPER MONACO GP"}"#).unwrap();
        assert_eq!(reading.text, "SUPER MONACO GP");
        assert_eq!(reading.confidence, 0.0);
        assert!(!reading.meets_confidence(30.0));
        assert!(reading.meets_confidence(0.0));
    }

    #[test]
    fn test_ocr_reading_deserialize_rejects_out_of_range_confidence() {
        let result = serde_json::from_str::<OcrReading>(r#"{"text":"x","confidence":250}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid confidence 250"));

        let reading: OcrReading =
            serde_json::from_str(r#"{"text":"SONIC","confidence":87.5}"#).unwrap();
        assert_eq!(reading, OcrReading::new("SONIC", 87.5).unwrap());
    }

    #[test]
    fn test_candidate_origin_display() {
        assert_eq!(CandidateOrigin::UppercaseRun.to_string(), "Uppercase Run");
        assert_eq!(CandidateOrigin::Franchise.to_string(), "Franchise");
        assert!(CandidateOrigin::Fragment.is_aggressive());
        assert!(!CandidateOrigin::DirectLine.is_aggressive());
    }
}
