//! Writing extracted regions to disk

use image::RgbImage;
use log::{error, info};

use super::errors::ExportError;
use super::validator::ExportDestination;

/// Encodes a region in the format chosen by its validated suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportWriter;

impl ExportWriter {
    pub fn new() -> Self {
        ExportWriter
    }

    /// Write `region` to `destination`
    pub fn write(&self, region: &RgbImage, destination: &ExportDestination) -> Result<(), ExportError> {
        info!("Saving {}x{} region to {} as {:?}",
              region.width(), region.height(), destination.path.display(), destination.format);

        region.save_with_format(&destination.path, destination.format)
            .map_err(|e| {
                error!("Failed to save region: {}", e);
                ExportError::ExportWriteFailure {
                    path: destination.path.display().to_string(),
                    reason: e.to_string(),
                }
            })
    }
}
