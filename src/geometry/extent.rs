//! ROI extent calculation
//!
//! Derives the square ROI from the bounding box of a user-drawn annotation.
//! The calculation is pure: the same geometry and side length always give the
//! same rectangle.

use log::debug;

use super::bbox::BoundingBox;
use super::point::Point;
use super::roi::RoiRect;

/// Computes a centered square ROI for an input geometry
#[derive(Debug, Clone, Copy)]
pub struct ExtentCalculator {
    /// Side length of the square
    size: u32,
}

impl ExtentCalculator {
    /// Create a calculator for squares of the given side length
    pub fn new(size: u32) -> Self {
        ExtentCalculator { size }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Place a square centered on the bounding box of `polygons`
    ///
    /// Returns `None` when no geometry was supplied.
    pub fn compute(&self, polygons: &[Vec<Point>]) -> Option<RoiRect> {
        let bbox = BoundingBox::containing(polygons)?;
        Some(self.compute_from_bbox(&bbox))
    }

    /// Place a square centered on an already computed bounding box
    pub fn compute_from_bbox(&self, bbox: &BoundingBox) -> RoiRect {
        let (center_x, center_y) = bbox.center();
        let half = (self.size / 2) as i64;
        let roi = RoiRect::new(center_x.saturating_sub(half), center_y.saturating_sub(half), self.size);

        debug!("Placed {}x{} ROI at ({}, {}) for bounding box {:?}",
               roi.size, roi.size, roi.x, roi.y, bbox);

        roi
    }
}
