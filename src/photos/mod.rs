//! Photo association.
//!
//! Attaches time-stamped photo references to the measurement record that
//! was being spoken when each photo was taken: the last record whose
//! timestamp is at or before the photo's capture time.

mod exif;

use crate::error::{ChecklistError, Result};
use crate::types::{ImageRef, MeasurementRecord};
use chrono::NaiveDateTime;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// Attach each image to the last record whose `captured_at_seconds` is at
/// or before the image's capture time. When no record qualifies (or no
/// record has a timestamp at all) the image goes to the first record.
///
/// Records are never created or dropped here; only their `images` lists
/// grow, in the order the images were supplied. With an empty record list
/// the images have nowhere to go and are discarded.
pub fn associate_photos(records: &mut [MeasurementRecord], images: Vec<ImageRef>) {
    if records.is_empty() {
        return;
    }

    for image in images {
        // Records are already in spoken (time) order, so a linear scan
        // keeping the last qualifying index is enough.
        let mut target = 0;
        for (i, record) in records.iter().enumerate() {
            if let Some(t) = record.captured_at_seconds {
                if t <= image.captured_at_seconds {
                    target = i;
                }
            }
        }
        records[target].images.push(image);
    }
}

/// Scan a photo folder into time-stamped image references.
///
/// Capture times come from EXIF; `recording_start` anchors them to seconds
/// since the recording began (photos taken before the recording clamp to
/// zero). Files without a readable EXIF time are skipped. Results are
/// sorted by capture time.
pub fn scan_photo_folder(
    folder: &std::path::Path,
    recording_start: NaiveDateTime,
) -> Result<Vec<ImageRef>> {
    if !folder.exists() {
        return Err(ChecklistError::FolderNotFound(
            folder.display().to_string(),
        ));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension() else {
            continue;
        };
        let ext_str = ext.to_string_lossy();
        if !IMAGE_EXTENSIONS.iter().any(|&e| e == ext_str) {
            continue;
        }

        let Ok(taken_at) = exif::extract_capture_time(path) else {
            continue;
        };

        images.push((path.display().to_string(), taken_at));
    }

    Ok(to_timed_refs(images, recording_start))
}

/// Turn (locator, capture time) pairs into image references with seconds
/// since the recording start, clamped at zero and sorted by capture time.
fn to_timed_refs(
    photos: Vec<(String, NaiveDateTime)>,
    recording_start: NaiveDateTime,
) -> Vec<ImageRef> {
    let mut images: Vec<ImageRef> = photos
        .into_iter()
        .map(|(locator, taken_at)| {
            let elapsed = (taken_at - recording_start).num_milliseconds() as f64 / 1000.0;
            ImageRef {
                locator,
                captured_at_seconds: elapsed.max(0.0),
            }
        })
        .collect();

    images.sort_by(|a, b| {
        a.captured_at_seconds
            .partial_cmp(&b.captured_at_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    images
}
