use std::fs;

use tempfile::tempdir;

use crate::annotation::{AnnotationStore, SessionFileStore};
use crate::errors::BoxDropError;

use super::test_utils::{labelled, placeholder};

#[test]
fn test_missing_session_loads_empty() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("slide.tif");
    let mut store = SessionFileStore::for_image(image.to_str().unwrap(), ".session.xml");

    assert_eq!(store.load().unwrap(), Vec::new());
    assert!(store.session_path().ends_with("slide.tif.session.xml"));
}

#[test]
fn test_persisted_sequence_reloads_in_order() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("slide.tif");
    let records = vec![
        labelled("Region 1", "35% <tumour & stroma>"),
        placeholder("Region 2"),
        labelled("Region 2", "60%"),
    ];

    let mut store = SessionFileStore::for_image(image.to_str().unwrap(), ".session.xml");
    store.load().unwrap();
    store.replace(records.clone());
    store.persist().unwrap();

    let mut reopened = SessionFileStore::for_image(image.to_str().unwrap(), ".session.xml");
    let loaded = reopened.load().unwrap();

    assert_eq!(loaded, records);
    assert!(loaded[1].is_placeholder());
}

#[test]
fn test_persist_leaves_only_the_session_file() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("annotations.xml");
    let mut store = SessionFileStore::with_session_path("slide.tif", &session);

    store.load().unwrap();
    store.replace(vec![placeholder("Region 1")]);
    store.persist().unwrap();
    store.replace(vec![labelled("Region 1", "5%")]);
    store.persist().unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(SessionFileStore::parse(&fs::read_to_string(&session).unwrap()).unwrap().len(), 1);
}

#[test]
fn test_persist_without_replace_rewrites_loaded_sequence() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("annotations.xml");
    let xml = SessionFileStore::serialize("slide.tif", &[placeholder("Region 1")]).unwrap();
    fs::write(&session, xml).unwrap();

    let mut store = SessionFileStore::with_session_path("slide.tif", &session);
    store.load().unwrap();
    store.persist().unwrap();

    let reloaded = SessionFileStore::parse(&fs::read_to_string(&session).unwrap()).unwrap();
    assert_eq!(reloaded, vec![placeholder("Region 1")]);
}

#[test]
fn test_parse_viewer_session() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<session image="slide.tif">
  <graphics>
    <graphic name="Region 1" geometry="Rectangle" style="pen:#00ff00">
      <description/>
      <polygon>
        <point x="10" y="20"/>
        <point x="30.5" y="20"/>
      </polygon>
    </graphic>
    <graphic name="Marker" geometry="arrow" style=""/>
  </graphics>
</session>"#;

    let records = SessionFileStore::parse(xml).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Region 1");
    assert_eq!(records[0].geometry.name(), "rectangle");
    assert_eq!(records[0].vertex_count(), 2);
    assert_eq!(records[0].points[0][1].x, 30.5);
    assert!(records[0].is_placeholder());
    assert_eq!(records[1].geometry.name(), "arrow");
}

#[test]
fn test_point_outside_polygon_is_rejected() {
    let xml = r#"<session><graphics><graphic name="a"><point x="1" y="2"/></graphic></graphics></session>"#;

    match SessionFileStore::parse(xml) {
        Err(BoxDropError::SessionFormat(_)) => {},
        other => panic!("expected a session format error, got {:?}", other),
    }
}

#[test]
fn test_bad_coordinate_is_rejected() {
    let xml = r#"<session><graphics><graphic name="a"><polygon><point x="one" y="2"/></polygon></graphic></graphics></session>"#;

    assert!(matches!(SessionFileStore::parse(xml), Err(BoxDropError::SessionFormat(_))));
}
