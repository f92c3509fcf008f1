use std::path::PathBuf;

use crate::export::ExportError;
use crate::pipeline::{ExportStatus, InvocationContext, ReportGenerator};

#[test]
fn test_report_layout() {
    let mut context = InvocationContext::new(true, 100);
    context.overlay_name = "Region 2".to_string();
    context.overlay_count = 3;

    let report = ReportGenerator::new().generate(&context);

    assert_eq!(report, "ROI Size:           100x100\nProcessed Box:      Region 23\n");
}

#[test]
fn test_report_lists_export_outcome() {
    let mut context = InvocationContext::new(true, 64);
    context.export = ExportStatus::Failed(ExportError::BlankDestination);

    let report = ReportGenerator::new().generate(&context);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("filename is blank"));

    context.export = ExportStatus::Written { path: PathBuf::from("roi.png"), width: 64, height: 64 };
    let report = ReportGenerator::new().generate(&context);
    assert!(report.ends_with("Saved 64x64 region to roi.png\n"));
}

#[test]
fn test_skipped_export_adds_no_line() {
    let mut context = InvocationContext::new(false, 512);
    context.export = ExportStatus::Skipped;

    assert_eq!(ReportGenerator::new().generate(&context).lines().count(), 2);
}
