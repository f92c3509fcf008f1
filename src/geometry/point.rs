//! Point structure for annotation vertices

/// A vertex of an annotation polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (pixels from left)
    pub x: f64,
    /// Y coordinate (pixels from top)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point from integer pixel coordinates
    pub fn from_pixel(x: i64, y: i64) -> Self {
        Point { x: x as f64, y: y as f64 }
    }
}
