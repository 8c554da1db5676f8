use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Capture time from EXIF DateTimeOriginal (falling back to DateTime).
pub fn extract_capture_time(path: &Path) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif_reader = exif::Reader::new();
    let exif = exif_reader.read_from_container(&mut bufreader)?;

    for tag in [exif::Tag::DateTimeOriginal, exif::Tag::DateTime] {
        if let Some(field) = exif.get_field(tag, exif::In::PRIMARY) {
            let text = field.display_value().to_string();
            // EXIF format: "2026-08-12 10:31:05"
            if let Ok(dt) = NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S") {
                return Ok(dt);
            }
            // Raw EXIF spelling: "2026:08:12 10:31:05"
            if let Ok(dt) = NaiveDateTime::parse_from_str(&text, "%Y:%m:%d %H:%M:%S") {
                return Ok(dt);
            }
        }
    }

    Err("no capture time found in EXIF".into())
}
