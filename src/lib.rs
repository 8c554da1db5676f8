//! voice-checklist-rust
//!
//! Turns a transcribed quality-inspection recording into a spec-checked
//! checklist spreadsheet, optionally annotating an existing template and
//! cross-referencing time-stamped photos.
//!
//! Pipeline: transcript -> [`transcript::extract_measurements`] ->
//! [`photos::associate_photos`] -> [`checklist`] (create or annotate).

pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod photos;
pub mod transcript;
pub mod types;
pub mod units;

pub use checklist::{annotate_checklist, create_checklist, TemplateSheet};
pub use error::{ChecklistError, Result};
pub use photos::associate_photos;
pub use transcript::extract_measurements;
pub use types::{ImageRef, MeasurementRecord, SpeechSegment};
pub use units::UnitCatalog;
