//! The square region of interest placed by the pipeline

use super::point::Point;

/// Reference point a rectangle rotates around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
}

/// Square region of interest in pixel coordinates
///
/// The top-left corner may lie outside the image when the triggering
/// annotation sits near an edge, so coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiRect {
    /// X-coordinate of the top-left corner
    pub x: i64,
    /// Y-coordinate of the top-left corner
    pub y: i64,
    /// Width and height in pixels
    pub size: u32,
    /// Rotation in degrees; always 0 for placed ROIs
    pub rotation: f64,
    pub anchor: Anchor,
}

impl RoiRect {
    /// Create an unrotated, center-anchored square
    pub fn new(x: i64, y: i64, size: u32) -> Self {
        RoiRect {
            x,
            y,
            size,
            rotation: 0.0,
            anchor: Anchor::Center,
        }
    }

    pub fn width(&self) -> u32 {
        self.size
    }

    pub fn height(&self) -> u32 {
        self.size
    }

    /// X-coordinate immediately right of the region
    pub fn end_x(&self) -> i64 {
        self.x.saturating_add(self.size as i64)
    }

    /// Y-coordinate immediately below the region
    pub fn end_y(&self) -> i64 {
        self.y.saturating_add(self.size as i64)
    }

    /// Four corners clockwise, starting at the top-left
    pub fn corners(&self) -> Vec<Point> {
        vec![
            Point::from_pixel(self.x, self.y),
            Point::from_pixel(self.end_x(), self.y),
            Point::from_pixel(self.end_x(), self.end_y()),
            Point::from_pixel(self.x, self.end_y()),
        ]
    }
}
