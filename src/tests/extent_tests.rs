use crate::geometry::{Anchor, BoundingBox, ExtentCalculator, Point};

#[test]
fn test_roi_centered_on_bounding_box() {
    let calculator = ExtentCalculator::new(100);
    let roi = calculator.compute_from_bbox(&BoundingBox::new(100, 100, 300, 300));

    assert_eq!((roi.x, roi.y), (150, 150));
    assert_eq!((roi.width(), roi.height()), (100, 100));
    assert_eq!(roi.rotation, 0.0);
    assert_eq!(roi.anchor, Anchor::Center);
}

#[test]
fn test_odd_sums_are_truncated() {
    let roi = ExtentCalculator::new(3).compute_from_bbox(&BoundingBox::new(0, 0, 5, 5));

    // center (2, 2), half side 1
    assert_eq!((roi.x, roi.y), (1, 1));
}

#[test]
fn test_negative_center_truncates_toward_zero() {
    let roi = ExtentCalculator::new(2).compute_from_bbox(&BoundingBox::new(-5, -5, 0, 0));

    // (-5 + 0) / 2 truncates to -2
    assert_eq!((roi.x, roi.y), (-3, -3));
}

#[test]
fn test_polygon_bounds_use_all_points() {
    let polygons = vec![
        vec![Point::new(10.5, 20.2), Point::new(30.7, 22.0)],
        vec![Point::new(12.0, 40.9)],
    ];

    let bbox = BoundingBox::containing(&polygons).expect("points present");
    assert_eq!(bbox, BoundingBox::new(10, 20, 31, 41));

    let roi = ExtentCalculator::new(10).compute(&polygons).expect("roi placed");
    assert_eq!((roi.x, roi.y), (15, 25));
}

#[test]
fn test_no_geometry_places_nothing() {
    let calculator = ExtentCalculator::new(64);

    assert!(calculator.compute(&[]).is_none());
    assert!(calculator.compute(&[Vec::new()]).is_none());
}

#[test]
fn test_compute_is_deterministic() {
    let polygons = vec![BoundingBox::new(7, 9, 411, 233).to_polygon()];
    let calculator = ExtentCalculator::new(128);

    assert_eq!(calculator.compute(&polygons), calculator.compute(&polygons));
}

#[test]
fn test_corners_are_clockwise_from_top_left() {
    let roi = ExtentCalculator::new(100).compute_from_bbox(&BoundingBox::new(100, 100, 300, 300));

    assert_eq!(roi.corners(), vec![
        Point::new(150.0, 150.0),
        Point::new(250.0, 150.0),
        Point::new(250.0, 250.0),
        Point::new(150.0, 250.0),
    ]);
}

#[test]
fn test_center_of_extreme_coordinates_does_not_overflow() {
    let bbox = BoundingBox::from_string("9223372036854775806,0,9223372036854775807,0").unwrap();
    let roi = ExtentCalculator::new(100).compute_from_bbox(&bbox);

    assert_eq!(bbox.center(), (i64::MAX - 1, 0));
    assert_eq!((roi.x, roi.y), (i64::MAX - 51, -50));
    assert_eq!(roi.end_x(), i64::MAX);

    let low = BoundingBox::new(i64::MIN, i64::MIN, i64::MIN + 1, i64::MIN + 1);
    let roi = ExtentCalculator::new(100).compute_from_bbox(&low);
    assert_eq!((roi.x, roi.y), (i64::MIN, i64::MIN));
}

#[test]
fn test_bbox_from_string() {
    assert_eq!(BoundingBox::from_string("100, 100,300,300"), Ok(BoundingBox::new(100, 100, 300, 300)));
    assert!(BoundingBox::from_string("1,2,3").is_err());
    assert!(BoundingBox::from_string("1,2,x,4").is_err());
    assert!(BoundingBox::from_string("300,300,100,100").is_err());
}
