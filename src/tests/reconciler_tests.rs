use crate::annotation::{collapse_placeholders, AnnotationReconciler, GeometryKind, GraphicStyle};
use crate::geometry::RoiRect;

use super::test_utils::{labelled, placeholder};

fn names_and_descriptions(records: &[crate::annotation::AnnotationRecord]) -> Vec<(String, String)> {
    records.iter().map(|r| (r.name.clone(), r.description.clone())).collect()
}

#[test]
fn test_placeholder_followed_by_label_is_dropped() {
    let records = vec![placeholder("Region 1"), labelled("Region 1", "40%")];

    let collapsed = collapse_placeholders(records);

    assert_eq!(names_and_descriptions(&collapsed), vec![
        ("Region 1".to_string(), "Cellularity: 40%".to_string()),
    ]);
}

#[test]
fn test_unrelated_records_are_kept() {
    let records = vec![
        // different name
        placeholder("Region 1"),
        labelled("Region 2", "10%"),
        // not labelled by the pipeline
        placeholder("Region 3"),
        placeholder("Region 3").with_description("tumour margin"),
        // trailing placeholder
        placeholder("Region 4"),
    ];

    let collapsed = collapse_placeholders(records.clone());

    assert_eq!(collapsed, records);
}

#[test]
fn test_order_is_preserved_around_dropped_placeholders() {
    let records = vec![
        labelled("A", "5%"),
        placeholder("B"),
        labelled("B", "20%"),
        placeholder("C"),
        placeholder("D"),
        labelled("D", "70%"),
    ];

    let collapsed = collapse_placeholders(records);
    let names: Vec<&str> = collapsed.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["A", "B", "C", "D"]);
    assert!(collapsed[1].is_labelled());
    assert!(collapsed[2].is_placeholder());
    assert!(collapsed[3].is_labelled());
}

#[test]
fn test_empty_sequence() {
    let reconciler = AnnotationReconciler::new("40%");

    let result = reconciler.reconcile(Vec::new(), None);

    assert!(result.records.is_empty());
    assert!(result.appended.is_none());
    assert_eq!(result.seen_count, 0);
}

#[test]
fn test_roi_record_inherits_from_last_record() {
    let reconciler = AnnotationReconciler::new("40%");
    let mut last = placeholder("Region 2");
    last.style = GraphicStyle::new("pen:#ff0000");
    last.geometry = GeometryKind::Rectangle;
    let records = vec![labelled("Region 1", "10%"), last];
    let roi = RoiRect::new(150, 150, 100);

    let result = reconciler.reconcile(records, Some(&roi));

    assert_eq!(result.seen_count, 3);
    assert_eq!(result.dropped, 1);
    assert_eq!(result.records.len(), 2);

    let appended = result.appended.expect("roi record appended");
    assert_eq!(appended.name, "Region 2");
    assert_eq!(appended.style, GraphicStyle::new("pen:#ff0000"));
    assert_eq!(appended.geometry, GeometryKind::Rectangle);
    assert_eq!(appended.description, "Cellularity: 40%");
    assert_eq!(appended.points, vec![roi.corners()]);
    assert_eq!(result.records.last(), Some(&appended));
}

#[test]
fn test_roi_on_empty_store_gets_defaults() {
    let reconciler = AnnotationReconciler::new("");
    let roi = RoiRect::new(0, 0, 10);

    let result = reconciler.reconcile(Vec::new(), Some(&roi));

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "");
    assert_eq!(result.records[0].geometry, GeometryKind::Rectangle);
    assert_eq!(result.records[0].description, "Cellularity: ");
}

#[test]
fn test_labelled_record_is_not_collapsed_twice() {
    let reconciler = AnnotationReconciler::new("40%");
    let roi = RoiRect::new(150, 150, 100);

    // A second placement on an already labelled record only appends
    let records = vec![labelled("Region 1", "40%")];
    let result = reconciler.reconcile(records, Some(&roi));

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.dropped, 0);
}
