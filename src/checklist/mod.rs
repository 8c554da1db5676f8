//! Checklist document building.
//!
//! Two modes:
//! - create: a fresh workbook straight from the records
//! - annotate: merge records into an existing template, with tolerance
//!   evaluation against its nominal/tolerance columns
//!
//! Both are single-pass and stateless; a failure mid-build aborts without
//! a committed artifact because the workbook is only saved at the end.

pub mod annotate;
pub mod create;
pub mod gallery;
pub mod template;
pub mod tolerance;

pub use annotate::{annotate_checklist, annotate_sheet};
pub use create::create_checklist;
pub use template::{TemplateColumnMap, TemplateSheet};
pub use tolerance::{evaluate_record, SpecEvaluation};

use rust_xlsxwriter::{Color, Format, FormatUnderline};

/// Shared format for gallery hyperlinks: blue and underlined so annotated
/// comment cells read as links.
pub(crate) fn hyperlink_format() -> Format {
    Format::new()
        .set_font_color(Color::Blue)
        .set_underline(FormatUnderline::Single)
}
