//! Pixel source interface and factory

use std::path::Path;
use image::{ImageFormat, RgbImage};
use log::{debug, error, info};

use crate::errors::{BoxDropError, BoxDropResult};
use crate::geometry::RoiRect;
use super::image_source::ImageFileSource;

/// Backend able to extract the pixels under a rectangle
///
/// Extraction is synchronous and may be expensive for large regions.
pub trait PixelSource {
    /// Identifier of the image this source reads
    fn source_id(&self) -> &str;

    /// Full-resolution width and height of the image
    fn dimensions(&self) -> (u32, u32);

    /// Extract the region covered by `roi` at native resolution
    ///
    /// The returned buffer is always `roi.size` pixels square; parts of the
    /// region outside the image are black.
    fn extract(&mut self, roi: &RoiRect) -> BoxDropResult<RgbImage>;
}

/// Opens pixel sources for image identifiers
pub trait PixelSourceFactory {
    /// Open a source for the image identified by `source_id`
    fn open(&self, source_id: &str) -> BoxDropResult<Box<dyn PixelSource>>;
}

/// Factory for sources decodable by the `image` crate
#[derive(Debug, Default)]
pub struct ImageSourceFactory;

impl ImageSourceFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ImageSourceFactory
    }

    /// Check if a source can be opened for the given path
    pub fn supports_format(&self, path: &str) -> bool {
        ImageFormat::from_path(Path::new(path))
            .map(|format| format.reading_enabled())
            .unwrap_or(false)
    }
}

impl PixelSourceFactory for ImageSourceFactory {
    fn open(&self, source_id: &str) -> BoxDropResult<Box<dyn PixelSource>> {
        debug!("Determining pixel source for {}", source_id);

        if !self.supports_format(source_id) {
            error!("Unsupported image format: {}", source_id);
            return Err(BoxDropError::ImageError(format!("Unsupported image format: {}", source_id)));
        }

        info!("Using image file source for {}", source_id);
        Ok(Box::new(ImageFileSource::open(source_id)?))
    }
}
