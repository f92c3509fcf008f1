//! Cached export handle

use image::RgbImage;
use log::debug;

use crate::errors::BoxDropResult;
use crate::geometry::RoiRect;
use super::source::PixelSource;

/// Open pixel source kept between invocations
///
/// The pipeline creates it lazily at the start of an invocation and drops
/// it when the host cancels a run, so a possibly inconsistent source is
/// never reused.
pub struct ExportHandle {
    source: Box<dyn PixelSource>,
}

impl ExportHandle {
    pub fn new(source: Box<dyn PixelSource>) -> Self {
        debug!("Created export handle for {}", source.source_id());
        ExportHandle { source }
    }

    /// Whether this handle reads the image identified by `source_id`
    pub fn is_bound_to(&self, source_id: &str) -> bool {
        self.source.source_id() == source_id
    }

    pub fn source_id(&self) -> &str {
        self.source.source_id()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// Extract the pixels under `roi`
    pub fn extract(&mut self, roi: &RoiRect) -> BoxDropResult<RgbImage> {
        self.source.extract(roi)
    }
}
