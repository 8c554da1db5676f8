//! Exchange types shared across the pipeline stages.
//!
//! - MeasurementRecord: one (part, value, unit) fact extracted from speech
//! - ImageRef: a time-stamped photo reference supplied by the caller
//! - SpeechSegment: a phrase chunk as reported by the speech engine

use serde::{Deserialize, Serialize};

/// One measurement extracted from the transcript.
///
/// `measured_value` is `f64::NAN` when a part was mentioned but no numeral
/// could be recognized; such records stay visible in the output checklist
/// but never enter tolerance evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub part: String,

    pub measured_value: f64,

    /// Canonical unit code (already normalized by the unit catalog).
    pub unit: String,

    /// Start time of the speech segment that announced the part,
    /// seconds from the beginning of the recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at_seconds: Option<f64>,

    /// Photos attached by the associator, in supplied order.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl MeasurementRecord {
    pub fn new(part: impl Into<String>, measured_value: f64, unit: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            measured_value,
            unit: unit.into(),
            captured_at_seconds: None,
            images: Vec::new(),
        }
    }

    /// True when no numeral could be recognized for this part mention.
    pub fn is_unquantified(&self) -> bool {
        self.measured_value.is_nan()
    }
}

/// A time-stamped photo reference. `locator` is opaque (path or URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub locator: String,
    pub captured_at_seconds: f64,
}

/// A phrase chunk from the speech engine, used only to recover
/// part-mention timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechSegment {
    pub text: String,
    pub start_seconds: f64,
}
