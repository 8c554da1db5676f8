//! End-to-end pipeline tests: transcript in, workbook out.

use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;
use voice_checklist_rust::checklist::TemplateSheet;
use voice_checklist_rust::{
    associate_photos, create_checklist, extract_measurements, ImageRef, SpeechSegment,
    UnitCatalog,
};

fn write_template(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let headers = ["Part Number", "Nominal (mm)", "Tolerance"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .expect("write header");
    }
    worksheet.write_string(1, 0, "AB-1").expect("write part");
    worksheet.write_number(1, 1, 10.0).expect("write nominal");
    worksheet.write_number(1, 2, 0.5).expect("write tolerance");
    worksheet.write_string(2, 0, "CD-2").expect("write part");
    worksheet.write_number(2, 1, 20.0).expect("write nominal");
    worksheet.write_number(2, 2, 1.0).expect("write tolerance");
    workbook.save(path).expect("save template");
}

#[test]
fn test_create_mode_end_to_end() {
    let dir = tempdir().expect("temp dir");
    let output = dir.path().join("inspection.xlsx");

    let catalog = UnitCatalog::new();
    let records = extract_measurements("Part 100 dimension 5 millimeters", &[], &catalog);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].part, "100");
    assert_eq!(records[0].measured_value, 5.0);
    assert_eq!(records[0].unit, "mm");

    create_checklist(&records, &output).expect("create checklist");

    let sheet = TemplateSheet::load(&output).expect("reload output");
    assert_eq!(sheet.cell(0, 0), "Part Number");
    assert_eq!(sheet.cell(1, 0), "100");
    assert_eq!(sheet.cell(1, 1), "5");
    assert_eq!(sheet.cell(1, 2), "mm");
    // No photos, no template: the comment cell stays empty.
    assert_eq!(sheet.cell(1, 3), "");
}

#[test]
fn test_annotate_mode_end_to_end() {
    let dir = tempdir().expect("temp dir");
    let template = dir.path().join("template.xlsx");
    let output = dir.path().join("annotated.xlsx");
    write_template(&template);

    let catalog = UnitCatalog::new();
    let transcript =
        "Part AB-1 dimension is ten point eight millimeters Part CD-2 dimension is 19.5 mm";
    let records = extract_measurements(transcript, &[], &catalog);
    assert_eq!(records.len(), 2);
    assert!((records[0].measured_value - 10.8).abs() < 1e-9);

    voice_checklist_rust::annotate_checklist(&template, &records, &output, &catalog)
        .expect("annotate");

    let sheet = TemplateSheet::load(&output).expect("reload output");
    // Appended headers sit after the template's three columns.
    assert_eq!(sheet.cell(0, 3), "Recorded Value");
    assert_eq!(sheet.cell(0, 4), "Recorded Unit");
    assert_eq!(sheet.cell(0, 5), "Comment");
    // AB-1: 10.8 against 10 +/- 0.5.
    assert_eq!(sheet.cell(1, 3), "10.8");
    assert_eq!(sheet.cell(1, 4), "mm");
    assert_eq!(sheet.cell(1, 5), "out of spec by 0.30 mm");
    // CD-2: 19.5 against 20 +/- 1.
    assert_eq!(sheet.cell(2, 3), "19.5");
    assert_eq!(sheet.cell(2, 4), "mm");
    assert_eq!(sheet.cell(2, 5), "in spec");
}

#[test]
fn test_annotate_drops_unmatched_and_keeps_nan_visible() {
    let dir = tempdir().expect("temp dir");
    let template = dir.path().join("template.xlsx");
    let output = dir.path().join("annotated.xlsx");
    write_template(&template);

    let catalog = UnitCatalog::new();
    // ZZ-9 has no template row; AB-1 was mentioned but never quantified.
    let transcript = "Part ZZ-9 width 3 mm Part AB-1 thickness roughly millimeters";
    let records = extract_measurements(transcript, &[], &catalog);
    assert_eq!(records.len(), 2);
    assert!(records[1].measured_value.is_nan());

    voice_checklist_rust::annotate_checklist(&template, &records, &output, &catalog)
        .expect("annotate");

    let sheet = TemplateSheet::load(&output).expect("reload output");
    // AB-1 keeps its unit visible, value and comment stay empty.
    assert_eq!(sheet.cell(1, 3), "");
    assert_eq!(sheet.cell(1, 4), "mm");
    assert_eq!(sheet.cell(1, 5), "");
}

#[test]
fn test_photo_association_with_timed_transcript() {
    let segments = vec![
        SpeechSegment {
            text: "Part AB-1 dimension 5 mm".into(),
            start_seconds: 0.0,
        },
        SpeechSegment {
            text: "Part CD-2 dimension 6 mm".into(),
            start_seconds: 5.0,
        },
        SpeechSegment {
            text: "Part EF-3 dimension 7 mm".into(),
            start_seconds: 12.0,
        },
    ];
    let transcript = "Part AB-1 dimension 5 mm Part CD-2 dimension 6 mm Part EF-3 dimension 7 mm";

    let catalog = UnitCatalog::new();
    let mut records = extract_measurements(transcript, &segments, &catalog);
    assert_eq!(records.len(), 3);

    associate_photos(
        &mut records,
        vec![ImageRef {
            locator: "evidence.jpg".into(),
            captured_at_seconds: 7.0,
        }],
    );

    // Taken at t=7: belongs to the record spoken at t=5, not t=0 or t=12.
    assert!(records[0].images.is_empty());
    assert_eq!(records[1].images.len(), 1);
    assert!(records[2].images.is_empty());
}
