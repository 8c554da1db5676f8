//! Measurement extraction from transcribed speech.
//!
//! ## Flow
//! 1. Segment the transcript at "part ..." announcements
//! 2. Find the first unit keyword in each segment
//! 3. Collect the numeral tokens spoken just before it and parse them
//! 4. Normalize the unit and, when speech-segment timing is available,
//!    attach the announcement's timestamp
//!
//! Segments without a recognized unit are skipped silently; segments
//! whose numeral span cannot be parsed still produce a record with a NaN
//! value so the operator sees that the part was mentioned.

pub mod numerals;
pub mod segmenter;

use crate::types::{MeasurementRecord, SpeechSegment};
use crate::units::UnitCatalog;
use numerals::{is_numeral_token, parse_numeral};
use segmenter::{count_part_announcements, segment_transcript};

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Strip sentence punctuation that the speech engine glues onto words.
fn clean(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
}

/// A unit hit inside a token list.
struct UnitHit {
    /// Index of the token containing the unit.
    index: usize,
    /// Raw unit text as spoken.
    raw: String,
    /// Numeric prefix when the unit was glued onto the number ("98.5%").
    inline_value: Option<f64>,
}

/// Find the first token that reads as a unit. Also accepts a numeric token
/// with a `%`/`°` suffix, which transcribers commonly emit as one word.
fn find_unit(tokens: &[&str], catalog: &UnitCatalog) -> Option<UnitHit> {
    for (index, token) in tokens.iter().enumerate() {
        let word = clean(token);
        if word.is_empty() {
            continue;
        }
        if catalog.is_unit(word) {
            return Some(UnitHit {
                index,
                raw: word.to_string(),
                inline_value: None,
            });
        }
        for suffix in ["%", "°"] {
            if let Some(prefix) = word.strip_suffix(suffix) {
                if !prefix.is_empty() {
                    if let Ok(value) = prefix.parse::<f64>() {
                        return Some(UnitHit {
                            index,
                            raw: suffix.to_string(),
                            inline_value: Some(value),
                        });
                    }
                }
            }
        }
    }
    None
}

/// Collect the numeral-vocabulary tokens immediately preceding `end`,
/// stopping at the first non-numeral token or segment start.
fn numeral_span(tokens: &[&str], end: usize) -> String {
    let mut collected: Vec<&str> = Vec::new();
    for token in tokens[..end].iter().rev() {
        let word = clean(token);
        if word.is_empty() || !is_numeral_token(word) {
            break;
        }
        collected.push(word);
    }
    collected.reverse();
    collected.join(" ")
}

/// Start times of the speech segments containing each part announcement,
/// one entry per announcement in transcript order. A single speech segment
/// can contribute several entries when it announces several parts.
fn announcement_times(speech_segments: &[SpeechSegment]) -> Vec<f64> {
    let mut times = Vec::new();
    for segment in speech_segments {
        let count = count_part_announcements(&segment.text);
        times.extend(std::iter::repeat(segment.start_seconds).take(count));
    }
    times
}

/// Extract ordered measurement records from a transcript.
///
/// `speech_segments` is the speech engine's phrase timing, used only to
/// recover per-record timestamps; pass an empty slice when unavailable.
/// Record order equals transcript occurrence order.
pub fn extract_measurements(
    transcript: &str,
    speech_segments: &[SpeechSegment],
    catalog: &UnitCatalog,
) -> Vec<MeasurementRecord> {
    let times = announcement_times(speech_segments);
    let mut records = Vec::new();

    for segment in segment_transcript(transcript) {
        let tokens = tokenize(segment.text);
        let Some(hit) = find_unit(&tokens, catalog) else {
            // No unit spoken for this mention; skip silently.
            continue;
        };

        let value = match hit.inline_value {
            Some(v) => v,
            None => parse_numeral(&numeral_span(&tokens, hit.index)),
        };

        let mut record = MeasurementRecord::new(segment.part, value, catalog.normalize(&hit.raw));
        // The announcement ordinal indexes into the speech-segment times,
        // so skipped segments cannot shift later timestamps.
        record.captured_at_seconds = times.get(segment.keyword_index).copied();
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> UnitCatalog {
        UnitCatalog::new()
    }

    #[test]
    fn test_extract_two_records() {
        let text =
            "Part AB-1 dimension is three point two millimeters Part CD-2 dimension is 10 mm";
        let records = extract_measurements(text, &[], &catalog());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].part, "AB-1");
        assert!((records[0].measured_value - 3.2).abs() < 1e-9);
        assert_eq!(records[0].unit, "mm");
        assert_eq!(records[1].part, "CD-2");
        assert_eq!(records[1].measured_value, 10.0);
        assert_eq!(records[1].unit, "mm");
    }

    #[test]
    fn test_unit_normalized() {
        let records = extract_measurements("part A1 weight is two pounds", &[], &catalog());
        assert_eq!(records[0].unit, "lbs");
        assert_eq!(records[0].measured_value, 2.0);
    }

    #[test]
    fn test_segment_without_unit_skipped() {
        let text = "part A1 looks scratched part B2 width 4 mm";
        let records = extract_measurements(text, &[], &catalog());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].part, "B2");
    }

    #[test]
    fn test_unparseable_numeral_keeps_record_as_nan() {
        let records = extract_measurements("part A1 thickness roughly millimeters", &[], &catalog());
        assert_eq!(records.len(), 1);
        assert!(records[0].is_unquantified());
        assert_eq!(records[0].unit, "mm");
    }

    #[test]
    fn test_inline_percent() {
        let records = extract_measurements("part A1 density 98.5% today", &[], &catalog());
        assert_eq!(records[0].measured_value, 98.5);
        assert_eq!(records[0].unit, "%");
    }

    #[test]
    fn test_fraction_value() {
        let records = extract_measurements("part A1 gap 7/8 inches", &[], &catalog());
        assert!((records[0].measured_value - 0.875).abs() < 1e-9);
        assert_eq!(records[0].unit, "in");
    }

    #[test]
    fn test_timestamps_from_speech_segments() {
        let segments = vec![
            SpeechSegment {
                text: "Part A1 length 5 mm".into(),
                start_seconds: 1.5,
            },
            SpeechSegment {
                text: "Part B2 length 6 mm".into(),
                start_seconds: 9.0,
            },
        ];
        let transcript = "Part A1 length 5 mm Part B2 length 6 mm";
        let records = extract_measurements(transcript, &segments, &catalog());
        assert_eq!(records[0].captured_at_seconds, Some(1.5));
        assert_eq!(records[1].captured_at_seconds, Some(9.0));
    }

    #[test]
    fn test_timestamp_alignment_survives_skipped_segment() {
        // The middle announcement has no unit and produces no record, but
        // the third record must still get the third announcement's time.
        let segments = vec![
            SpeechSegment {
                text: "Part A1 length 5 mm".into(),
                start_seconds: 0.0,
            },
            SpeechSegment {
                text: "Part B2 surface looks fine".into(),
                start_seconds: 4.0,
            },
            SpeechSegment {
                text: "Part C3 length 7 mm".into(),
                start_seconds: 8.0,
            },
        ];
        let transcript = "Part A1 length 5 mm Part B2 surface looks fine Part C3 length 7 mm";
        let records = extract_measurements(transcript, &segments, &catalog());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].captured_at_seconds, Some(0.0));
        assert_eq!(records[1].part, "C3");
        assert_eq!(records[1].captured_at_seconds, Some(8.0));
    }

    #[test]
    fn test_missing_times_leave_none() {
        let segments = vec![SpeechSegment {
            text: "Part A1 length 5 mm".into(),
            start_seconds: 2.0,
        }];
        let transcript = "Part A1 length 5 mm Part B2 length 6 mm";
        let records = extract_measurements(transcript, &segments, &catalog());
        assert_eq!(records[0].captured_at_seconds, Some(2.0));
        assert_eq!(records[1].captured_at_seconds, None);
    }
}
