//! Create mode: build a fresh checklist workbook from measurement records.

use super::gallery::{gallery_file_name, write_gallery};
use super::hyperlink_format;
use crate::error::{ChecklistError, Result};
use crate::types::MeasurementRecord;
use rust_xlsxwriter::{Format, Url, Workbook};
use std::path::Path;

fn excel_err(e: rust_xlsxwriter::XlsxError) -> ChecklistError {
    ChecklistError::ExcelGeneration(e.to_string())
}

/// Write a new checklist workbook with one row per record, in extraction
/// order. Records with photos get a gallery page next to the workbook and
/// a hyperlink in the comment cell; records without photos leave the
/// comment cell empty.
pub fn create_checklist(records: &[MeasurementRecord], output_path: &Path) -> Result<()> {
    let out_dir = output_path.parent().unwrap_or_else(|| Path::new("."));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Inspection Results")
        .map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let link_format = hyperlink_format();

    let headers = ["Part Number", "Measured Value", "Unit", "Comment"];
    let widths = [15.0, 20.0, 10.0, 30.0];
    for (col, (header, width)) in headers.iter().zip(widths).enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, width).map_err(excel_err)?;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;

        worksheet
            .write_string(row, 0, &record.part)
            .map_err(excel_err)?;
        // NaN means "value not determined": the part stays visible but the
        // quantitative cell is left empty.
        if !record.is_unquantified() {
            worksheet
                .write_number(row, 1, record.measured_value)
                .map_err(excel_err)?;
        }
        worksheet
            .write_string(row, 2, &record.unit)
            .map_err(excel_err)?;

        if !record.images.is_empty() {
            let file_name = gallery_file_name(&record.part, i);
            write_gallery(&out_dir.join(&file_name), &record.part, &record.images)?;

            let url = Url::new(format!("file:///{}", file_name))
                .set_text(format!("Photos ({})", record.images.len()));
            worksheet
                .write_url_with_format(row, 3, url, &link_format)
                .map_err(excel_err)?;
        }
    }

    workbook.save(output_path).map_err(excel_err)?;
    Ok(())
}
