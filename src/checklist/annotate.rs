//! Annotate mode: merge measurement records into an existing template.
//!
//! The template grid is reproduced into a new workbook with three columns
//! appended ("Recorded Value", "Recorded Unit", "Comment"). Each record is
//! matched against the part column (first matching row wins); unmatched
//! records are dropped silently.

use super::gallery::{gallery_file_name, write_gallery};
use super::hyperlink_format;
use super::template::TemplateSheet;
use super::tolerance::evaluate_record;
use crate::error::{ChecklistError, Result};
use crate::types::MeasurementRecord;
use rust_xlsxwriter::{Format, Url, Workbook};
use std::path::Path;

fn excel_err(e: rust_xlsxwriter::XlsxError) -> ChecklistError {
    ChecklistError::ExcelGeneration(e.to_string())
}

/// Annotate a template workbook with recorded values.
pub fn annotate_checklist(
    template_path: &Path,
    records: &[MeasurementRecord],
    output_path: &Path,
    catalog: &crate::units::UnitCatalog,
) -> Result<()> {
    let sheet = TemplateSheet::load(template_path)?;
    annotate_sheet(&sheet, records, output_path, catalog)
}

/// Same as [`annotate_checklist`] but over an already loaded sheet.
/// Split out so tests can build grids without a workbook file.
pub fn annotate_sheet(
    sheet: &TemplateSheet,
    records: &[MeasurementRecord],
    output_path: &Path,
    catalog: &crate::units::UnitCatalog,
) -> Result<()> {
    let map = sheet.column_map()?;
    let out_dir = output_path.parent().unwrap_or_else(|| Path::new("."));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Reproduce the template grid. Cells that read fully as numbers keep
    // their numeric type.
    for (row, cells) in sheet.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let (row, col) = (row as u32, col as u16);
            match cell.parse::<f64>() {
                Ok(number) => worksheet.write_number(row, col, number).map_err(excel_err)?,
                Err(_) => worksheet.write_string(row, col, cell).map_err(excel_err)?,
            };
        }
    }

    // Appended columns.
    let start_col = sheet.column_count() as u16;
    let header_format = Format::new().set_bold();
    let link_format = hyperlink_format();
    for (offset, header) in ["Recorded Value", "Recorded Unit", "Comment"]
        .iter()
        .enumerate()
    {
        let col = start_col + offset as u16;
        worksheet.set_column_width(col, 16.0).map_err(excel_err)?;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        // First matching row wins; records with no match are dropped.
        let Some(row) = sheet.find_part_row(&map, &record.part) else {
            continue;
        };

        let eval = evaluate_record(sheet, &map, row, record, catalog);
        let row = row as u32;

        if !eval.value.is_nan() {
            worksheet
                .write_number(row, start_col, eval.value)
                .map_err(excel_err)?;
        }
        worksheet
            .write_string(row, start_col + 1, &eval.unit)
            .map_err(excel_err)?;

        if !record.images.is_empty() {
            // The gallery link takes over the comment cell; the spec text
            // becomes its display text when present.
            let file_name = gallery_file_name(&record.part, i);
            write_gallery(&out_dir.join(&file_name), &record.part, &record.images)?;

            let display = eval
                .comment
                .clone()
                .unwrap_or_else(|| format!("Photos ({})", record.images.len()));
            let url = Url::new(format!("file:///{}", file_name)).set_text(display);
            worksheet
                .write_url_with_format(row, start_col + 2, url, &link_format)
                .map_err(excel_err)?;
        } else if let Some(comment) = &eval.comment {
            worksheet
                .write_string(row, start_col + 2, comment)
                .map_err(excel_err)?;
        }
    }

    workbook.save(output_path).map_err(excel_err)?;
    Ok(())
}
