//! Geometry primitives for annotation shapes and ROI placement
//!
//! Coordinates are image pixel coordinates at native resolution, with the
//! origin at the top-left corner of the image.

mod point;
mod bbox;
mod roi;
mod extent;

// Re-export key types
pub use self::point::Point;
pub use self::bbox::BoundingBox;
pub use self::roi::{Anchor, RoiRect};
pub use self::extent::ExtentCalculator;
