use crate::config::BoxDropConfig;
use crate::pipeline::{ChangeDetector, ChangeFlags, PipelineParameters};

use super::test_utils::drawn_square;

fn params() -> PipelineParameters {
    PipelineParameters::new(&BoxDropConfig::default())
        .with_annotation(drawn_square())
        .with_export("/tmp/roi.png")
}

#[test]
fn test_missing_handle_forces_change() {
    let mut detector = ChangeDetector::new();
    detector.commit(&params());

    assert!(detector.evaluate(&params(), &ChangeFlags::default(), false));
}

#[test]
fn test_first_invocation_is_changed() {
    let detector = ChangeDetector::new();

    assert!(detector.evaluate(&params(), &ChangeFlags::default(), true));
}

#[test]
fn test_identical_parameters_are_unchanged() {
    let mut detector = ChangeDetector::new();
    detector.commit(&params());

    assert!(!detector.evaluate(&params(), &ChangeFlags::default(), true));
}

#[test]
fn test_host_flags_force_change() {
    let mut detector = ChangeDetector::new();
    detector.commit(&params());
    let flags = ChangeFlags { destination: true, ..ChangeFlags::default() };

    assert!(flags.any());
    assert!(detector.evaluate(&params(), &flags, true));
}

#[test]
fn test_each_watched_value_triggers_change() {
    let mut detector = ChangeDetector::new();
    detector.commit(&params());

    let mut description = params();
    description.description = "55%".to_string();
    assert!(detector.evaluate(&description, &ChangeFlags::default(), true));

    let mut annotation = params();
    annotation.input_annotation = None;
    assert!(detector.evaluate(&annotation, &ChangeFlags::default(), true));

    let mut export = params();
    export.export_requested = false;
    assert!(detector.evaluate(&export, &ChangeFlags::default(), true));

    let mut destination = params();
    destination.destination = "/tmp/other.png".to_string();
    assert!(detector.evaluate(&destination, &ChangeFlags::default(), true));
}

#[test]
fn test_roi_size_is_not_watched() {
    let mut detector = ChangeDetector::new();
    detector.commit(&params());

    let mut resized = params();
    resized.roi_size = 64;
    assert!(!detector.evaluate(&resized, &ChangeFlags::default(), true));
}
