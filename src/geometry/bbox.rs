//! Axis-aligned bounding box in pixel coordinates

use super::point::Point;

/// Integer bounding box of an annotation geometry
///
/// Both corners are inclusive: a box parsed from `"100,100,300,300"` has
/// `max_x == 300`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: i64,
    /// Minimum Y coordinate
    pub min_y: i64,
    /// Maximum X coordinate
    pub max_x: i64,
    /// Maximum Y coordinate
    pub max_y: i64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        BoundingBox { min_x, min_y, max_x, max_y }
    }

    /// Smallest integer box containing every point of every polygon
    ///
    /// Fractional coordinates widen the box outwards (floor for the minimum,
    /// ceil for the maximum). Returns `None` when there are no points.
    pub fn containing<'a, I>(polygons: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec<Point>>,
    {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;

        for point in polygons.into_iter().flatten() {
            bounds = Some(match bounds {
                None => (point.x, point.y, point.x, point.y),
                Some((min_x, min_y, max_x, max_y)) => (
                    min_x.min(point.x),
                    min_y.min(point.y),
                    max_x.max(point.x),
                    max_y.max(point.y),
                ),
            });
        }

        bounds.map(|(min_x, min_y, max_x, max_y)| {
            BoundingBox::new(
                min_x.floor() as i64,
                min_y.floor() as i64,
                max_x.ceil() as i64,
                max_y.ceil() as i64,
            )
        })
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Bounding box must have 4 comma-separated values".to_string());
        }

        let parse = |value: &str, name: &str| {
            value.trim().parse::<i64>()
                .map_err(|_| format!("Invalid {} value: '{}'", name, value.trim()))
        };

        let min_x = parse(parts[0], "min_x")?;
        let min_y = parse(parts[1], "min_y")?;
        let max_x = parse(parts[2], "max_x")?;
        let max_y = parse(parts[3], "max_y")?;

        if min_x > max_x || min_y > max_y {
            return Err(format!("Bounding box corners are inverted: {}", bbox_str));
        }

        Ok(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Center of the box, halved with truncating division
    ///
    /// The sum is taken in `i128`; the midpoint always lies between the
    /// corners, so it fits back into `i64`.
    pub fn center(&self) -> (i64, i64) {
        (midpoint(self.min_x, self.max_x), midpoint(self.min_y, self.max_y))
    }

    /// Corners of the box as a polygon, clockwise from top-left
    pub fn to_polygon(&self) -> Vec<Point> {
        vec![
            Point::from_pixel(self.min_x, self.min_y),
            Point::from_pixel(self.max_x, self.min_y),
            Point::from_pixel(self.max_x, self.max_y),
            Point::from_pixel(self.min_x, self.max_y),
        ]
    }
}

fn midpoint(a: i64, b: i64) -> i64 {
    ((a as i128 + b as i128) / 2) as i64
}
