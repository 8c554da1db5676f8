//! Image gallery pages.
//!
//! Each record with attached photos gets a standalone HTML page next to
//! the checklist workbook; the workbook's comment cell links to it.

use crate::error::Result;
use crate::types::ImageRef;
use std::path::Path;

/// File name for a record's gallery page. The record ordinal keeps
/// duplicate part names from colliding.
pub fn gallery_file_name(part: &str, ordinal: usize) -> String {
    let safe: String = part
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("gallery_{}_{}.html", safe, ordinal)
}

/// Write a gallery page listing each image with its capture time.
pub fn write_gallery(path: &Path, part: &str, images: &[ImageRef]) -> Result<()> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!(
        "<meta charset=\"utf-8\">\n<title>Photos for part {}</title>\n",
        escape(part)
    ));
    html.push_str("<style>figure{margin:1em 0}img{max-width:640px;display:block}</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>Part {}</h1>\n", escape(part)));

    for image in images {
        html.push_str(&format!(
            "<figure><img src=\"{}\" alt=\"part {}\"><figcaption>captured at {:.1} s</figcaption></figure>\n",
            escape(&image.locator),
            escape(part),
            image.captured_at_seconds
        ));
    }

    html.push_str("</body>\n</html>\n");
    std::fs::write(path, html)?;
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
