//! Tolerance evaluation against a template row.
//!
//! Resolves the target unit for a template row, converts the measured
//! value into it, and classifies the result against nominal ± tolerance.
//! Unparseable nominal/tolerance cells yield no comment; the record is
//! still annotated with its converted value and unit.

use super::template::{first_number, parenthesized_token, TemplateColumnMap, TemplateSheet};
use crate::types::MeasurementRecord;
use crate::units::UnitCatalog;

/// Outcome of evaluating one record against one template row.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecEvaluation {
    /// Measured value converted into the target unit. NaN when the record
    /// was never quantified.
    pub value: f64,
    /// Resolved target unit (canonical).
    pub unit: String,
    /// "in spec" / "out of spec by ..." when both nominal and tolerance
    /// parsed; None otherwise.
    pub comment: Option<String>,
}

/// Resolve the unit a row's values are expressed in.
///
/// Priority: parenthesized token in the nominal column header, then the
/// row's unit cell, then the record's own unit (no conversion).
fn target_unit(
    sheet: &TemplateSheet,
    map: &TemplateColumnMap,
    row: usize,
    record: &MeasurementRecord,
    catalog: &UnitCatalog,
) -> String {
    if let Some(col) = map.nominal {
        if let Some(token) = parenthesized_token(sheet.cell(0, col)) {
            return catalog.normalize(token);
        }
    }
    if let Some(col) = map.unit {
        let cell = sheet.cell(row, col).trim();
        if !cell.is_empty() {
            return catalog.normalize(cell);
        }
    }
    record.unit.clone()
}

/// Evaluate a record against the template row it matched.
pub fn evaluate_record(
    sheet: &TemplateSheet,
    map: &TemplateColumnMap,
    row: usize,
    record: &MeasurementRecord,
    catalog: &UnitCatalog,
) -> SpecEvaluation {
    let unit = target_unit(sheet, map, row, record, catalog);

    if record.is_unquantified() {
        return SpecEvaluation {
            value: f64::NAN,
            unit,
            comment: None,
        };
    }

    let value = catalog.convert(record.measured_value, &record.unit, &unit);

    let nominal = map.nominal.and_then(|col| first_number(sheet.cell(row, col)));
    let tolerance = map
        .tolerance
        .and_then(|col| first_number(sheet.cell(row, col)));

    let comment = match (nominal, tolerance) {
        (Some(nominal), Some(tolerance)) => Some(classify(value, nominal, tolerance, &unit)),
        _ => None,
    };

    SpecEvaluation {
        value,
        unit,
        comment,
    }
}

/// Classify against nominal ± tolerance (bounds inclusive). The deviation
/// is the signed distance to the nearer bound, to two decimal places.
fn classify(value: f64, nominal: f64, tolerance: f64, unit: &str) -> String {
    let lower = nominal - tolerance;
    let upper = nominal + tolerance;

    if value >= lower && value <= upper {
        "in spec".to_string()
    } else {
        let deviation = if value > upper {
            value - upper
        } else {
            value - lower
        };
        format!("out of spec by {:.2} {}", deviation, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> TemplateSheet {
        TemplateSheet::from_rows(vec![
            vec![
                "Part".into(),
                "Nominal (mm)".into(),
                "Tolerance".into(),
            ],
            vec!["AB-1".into(), "10".into(), "0.5".into()],
            vec!["CD-2".into(), "target TBD".into(), "0.5".into()],
        ])
    }

    fn map(sheet: &TemplateSheet) -> TemplateColumnMap {
        sheet.column_map().expect("column map")
    }

    #[test]
    fn test_in_spec() {
        let sheet = sheet();
        let record = MeasurementRecord::new("AB-1", 10.3, "mm");
        let eval = evaluate_record(&sheet, &map(&sheet), 1, &record, &UnitCatalog::new());
        assert_eq!(eval.comment.as_deref(), Some("in spec"));
        assert_eq!(eval.value, 10.3);
        assert_eq!(eval.unit, "mm");
    }

    #[test]
    fn test_out_of_spec_above() {
        let sheet = sheet();
        let record = MeasurementRecord::new("AB-1", 10.8, "mm");
        let eval = evaluate_record(&sheet, &map(&sheet), 1, &record, &UnitCatalog::new());
        assert_eq!(eval.comment.as_deref(), Some("out of spec by 0.30 mm"));
    }

    #[test]
    fn test_out_of_spec_below_is_signed() {
        let sheet = sheet();
        let record = MeasurementRecord::new("AB-1", 9.2, "mm");
        let eval = evaluate_record(&sheet, &map(&sheet), 1, &record, &UnitCatalog::new());
        assert_eq!(eval.comment.as_deref(), Some("out of spec by -0.30 mm"));
    }

    #[test]
    fn test_header_unit_drives_conversion() {
        // Measured in cm, nominal column says mm.
        let sheet = sheet();
        let record = MeasurementRecord::new("AB-1", 1.0, "cm");
        let eval = evaluate_record(&sheet, &map(&sheet), 1, &record, &UnitCatalog::new());
        assert!((eval.value - 10.0).abs() < 1e-9);
        assert_eq!(eval.unit, "mm");
        assert_eq!(eval.comment.as_deref(), Some("in spec"));
    }

    #[test]
    fn test_unparseable_nominal_gives_no_comment() {
        let sheet = sheet();
        let record = MeasurementRecord::new("CD-2", 10.0, "mm");
        let eval = evaluate_record(&sheet, &map(&sheet), 2, &record, &UnitCatalog::new());
        assert_eq!(eval.comment, None);
        assert_eq!(eval.value, 10.0);
    }

    #[test]
    fn test_row_unit_cell_fallback() {
        let sheet = TemplateSheet::from_rows(vec![
            vec!["Part".into(), "Target".into(), "Unit".into(), "Tolerance".into()],
            vec!["AB-1".into(), "2".into(), "cm".into(), "0.1".into()],
        ]);
        let map = sheet.column_map().expect("column map");
        let record = MeasurementRecord::new("AB-1", 20.0, "mm");
        let eval = evaluate_record(&sheet, &map, 1, &record, &UnitCatalog::new());
        assert_eq!(eval.unit, "cm");
        assert!((eval.value - 2.0).abs() < 1e-9);
        assert_eq!(eval.comment.as_deref(), Some("in spec"));
    }

    #[test]
    fn test_nan_record_skips_evaluation() {
        let sheet = sheet();
        let record = MeasurementRecord::new("AB-1", f64::NAN, "mm");
        let eval = evaluate_record(&sheet, &map(&sheet), 1, &record, &UnitCatalog::new());
        assert!(eval.value.is_nan());
        assert_eq!(eval.comment, None);
        assert_eq!(eval.unit, "mm");
    }
}
