//! Template workbook access.
//!
//! A template is read through calamine into a plain text grid; the rest of
//! the pipeline never touches the binary format. The column map is derived
//! once from the header row by keyword matching.

use crate::error::{ChecklistError, Result};
use calamine::{open_workbook_auto, Reader};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new(r"-?\d+(\.\d+)?").unwrap();
    static ref PAREN_RE: Regex = Regex::new(r"\(([^)]+)\)").unwrap();
}

/// Column indices resolved from a template's header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateColumnMap {
    pub part: usize,
    pub nominal: Option<usize>,
    pub unit: Option<usize>,
    pub tolerance: Option<usize>,
}

/// A template sheet as a row-major text grid.
#[derive(Debug, Clone)]
pub struct TemplateSheet {
    rows: Vec<Vec<String>>,
}

impl TemplateSheet {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Read the first worksheet of an xlsx/xls/ods file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ChecklistError::FileNotFound(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ChecklistError::TemplateRead(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ChecklistError::InvalidTemplate("workbook has no sheets".into()))?
            .map_err(|e| ChecklistError::TemplateRead(e.to_string()))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row; new columns are appended after this.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell text, empty for out-of-bounds coordinates.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Derive the column map from the header row.
    ///
    /// Keyword matching is case-insensitive; headers containing "recorded"
    /// or "comment" are ignored so a previously annotated document is not
    /// re-matched on its own output columns. A missing part column is an
    /// unrecoverable template error.
    pub fn column_map(&self) -> Result<TemplateColumnMap> {
        let header = self
            .rows
            .first()
            .ok_or_else(|| ChecklistError::InvalidTemplate("template is empty".into()))?;

        let mut part = None;
        let mut nominal = None;
        let mut unit = None;
        let mut tolerance = None;

        for (col, cell) in header.iter().enumerate() {
            let text = cell.trim().to_lowercase();
            if text.is_empty() || text.contains("recorded") || text.contains("comment") {
                continue;
            }

            if part.is_none() && text.contains("part") {
                part = Some(col);
            } else if nominal.is_none()
                && ["dimension", "target", "nominal", "value"]
                    .iter()
                    .any(|k| text.contains(k))
            {
                nominal = Some(col);
            } else if unit.is_none() && text.contains("unit") {
                unit = Some(col);
            } else if tolerance.is_none()
                && (text.contains("tolerance") || text.contains("allowable"))
            {
                tolerance = Some(col);
            }
        }

        let part = part.ok_or_else(|| {
            ChecklistError::InvalidTemplate("no part column found in header row".into())
        })?;

        Ok(TemplateColumnMap {
            part,
            nominal,
            unit,
            tolerance,
        })
    }

    /// First data row whose part cell matches `part`
    /// (case-insensitive, trimmed). Row 0 is the header.
    pub fn find_part_row(&self, map: &TemplateColumnMap, part: &str) -> Option<usize> {
        let wanted = part.trim();
        (1..self.row_count())
            .find(|&row| self.cell(row, map.part).trim().eq_ignore_ascii_case(wanted))
    }
}

/// First embedded numeric literal in a cell's text
/// ("±0.5" -> 0.5, "10 mm" -> 10). Non-numeric text yields None.
pub fn first_number(text: &str) -> Option<f64> {
    NUMBER_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parenthesized token in a header cell ("Diameter (mm)" -> "mm").
pub fn parenthesized_token(text: &str) -> Option<&str> {
    PAREN_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
