//! Transcript segmentation.
//!
//! Splits raw transcript text into per-part segments anchored at
//! "part ..." announcements. Two passes: first collect the ordered
//! announcement matches, then slice the text between consecutive anchors,
//! so the boundary cases (first/last segment, zero matches) stay simple.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "part", optionally "number" and/or "is", then an identifier of
    /// letters, digits, hyphens and dots (e.g. "AB-314.01").
    static ref PART_RE: Regex =
        Regex::new(r"(?i)\bpart(?:\s+number)?(?:\s+is)?\s+([A-Za-z0-9][A-Za-z0-9.\-]*)")
            .unwrap();
}

/// One segment of transcript text belonging to a single part mention.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSegment<'a> {
    /// Spoken part identifier, trailing sentence punctuation trimmed.
    pub part: String,
    /// Transcript text from the end of the announcement to the next
    /// announcement (or end of transcript).
    pub text: &'a str,
    /// Ordinal of the "part" announcement in the transcript. Threaded
    /// through extraction to keep timestamp alignment correct even when a
    /// unit-less segment produces no record.
    pub keyword_index: usize,
}

/// Split a transcript into ordered, non-overlapping part segments.
///
/// Duplicate part names produce duplicate segments, preserving input
/// order. Zero announcements yield an empty vec.
pub fn segment_transcript(text: &str) -> Vec<PartSegment<'_>> {
    // Pass 1: anchor offsets.
    let matches: Vec<(usize, usize, String)> = PART_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let ident = caps.get(1)?;
            let part = ident
                .as_str()
                .trim_end_matches(|c| c == '.' || c == ',')
                .to_string();
            if part.is_empty() {
                return None;
            }
            Some((whole.start(), ident.end(), part))
        })
        .collect();

    // Pass 2: slice between consecutive anchors.
    matches
        .iter()
        .enumerate()
        .map(|(i, (_, end, part))| {
            let segment_end = matches
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(text.len());
            PartSegment {
                part: part.clone(),
                text: &text[*end..segment_end],
                keyword_index: i,
            }
        })
        .collect()
}

/// Count of part announcements in a piece of text. Used to map
/// announcement ordinals onto speech-engine segments.
pub fn count_part_announcements(text: &str) -> usize {
    PART_RE.find_iter(text).count()
}
