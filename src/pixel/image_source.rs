//! Pixel source backed by an image file

use image::{imageops, RgbImage};
use log::{info, warn};

use crate::errors::{BoxDropError, BoxDropResult};
use crate::geometry::RoiRect;
use super::source::PixelSource;

/// Reads regions out of an image file decodable by the `image` crate
///
/// Opening only reads the header. The pixel data is decoded on the first
/// extraction and kept for the lifetime of the source.
pub struct ImageFileSource {
    /// Path to the image file
    path: String,
    /// Image width and height
    dimensions: (u32, u32),
    /// Decoded pixels, filled on first use
    pixels: Option<RgbImage>,
}

impl ImageFileSource {
    /// Open an image file, reading its dimensions
    pub fn open(path: &str) -> BoxDropResult<Self> {
        let dimensions = image::image_dimensions(path)?;
        info!("Opened {} ({}x{})", path, dimensions.0, dimensions.1);

        Ok(ImageFileSource {
            path: path.to_string(),
            dimensions,
            pixels: None,
        })
    }

    /// Wrap pixels that are already in memory
    pub fn from_image(source_id: &str, image: RgbImage) -> Self {
        ImageFileSource {
            path: source_id.to_string(),
            dimensions: image.dimensions(),
            pixels: Some(image),
        }
    }

    fn decoded(&mut self) -> BoxDropResult<&RgbImage> {
        if self.pixels.is_none() {
            info!("Decoding {}", self.path);
            let image = image::open(&self.path)?;
            self.pixels = Some(image.to_rgb8());
        }

        self.pixels.as_ref()
            .ok_or_else(|| BoxDropError::ImageError(format!("No pixel data for {}", self.path)))
    }
}

impl PixelSource for ImageFileSource {
    fn source_id(&self) -> &str {
        &self.path
    }

    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn extract(&mut self, roi: &RoiRect) -> BoxDropResult<RgbImage> {
        let (width, height) = self.dimensions;
        let image = self.decoded()?;
        let mut region = RgbImage::new(roi.width(), roi.height());

        // Intersection of the ROI with the image
        let start_x = roi.x.max(0);
        let start_y = roi.y.max(0);
        let end_x = roi.end_x().min(width as i64);
        let end_y = roi.end_y().min(height as i64);

        if start_x >= end_x || start_y >= end_y {
            warn!("ROI at ({}, {}) lies outside the {}x{} image", roi.x, roi.y, width, height);
            return Ok(region);
        }

        let visible = imageops::crop_imm(
            image,
            start_x as u32,
            start_y as u32,
            (end_x - start_x) as u32,
            (end_y - start_y) as u32,
        ).to_image();
        imageops::replace(&mut region, &visible, start_x - roi.x, start_y - roi.y);

        info!("Extracted {}x{} region at ({}, {})", roi.width(), roi.height(), roi.x, roi.y);
        Ok(region)
    }
}
