//! Destination validation

use std::path::PathBuf;

use image::ImageFormat;
use log::{debug, warn};

use super::check_file::{check_file, FileMode};
use super::errors::ExportError;
use super::extensions::AllowedExtensions;

/// A destination that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDestination {
    pub path: PathBuf,
    /// Normalized suffix the format was inferred from
    pub extension: String,
    pub format: ImageFormat,
}

/// Runs the pre-flight checks on an export request
#[derive(Debug, Clone, Default)]
pub struct ExportValidator {
    extensions: AllowedExtensions,
}

impl ExportValidator {
    pub fn new(extensions: AllowedExtensions) -> Self {
        ExportValidator { extensions }
    }

    /// Validate an export request
    ///
    /// Returns `Ok(None)` when export was not requested. Checks run in order
    /// (blank name, writability, suffix) and stop at the first failure.
    pub fn validate(&self, export_requested: bool, destination: &str) -> Result<Option<ExportDestination>, ExportError> {
        if !export_requested {
            debug!("Export not requested");
            return Ok(None);
        }

        if destination.is_empty() {
            warn!("Export requested with a blank filename");
            return Err(ExportError::BlankDestination);
        }

        if !check_file(destination, FileMode::Write) {
            warn!("Export destination {} is not writable", destination);
            return Err(ExportError::UnwritableDestination(destination.to_string()));
        }

        let extension = AllowedExtensions::suffix_of(destination);
        let format = if self.extensions.contains(&extension) {
            ImageFormat::from_extension(&extension)
        } else {
            None
        };

        let Some(format) = format else {
            warn!("Export destination {} has unsupported extension '{}'", destination, extension);
            return Err(ExportError::InvalidExtension {
                extension,
                allowed: self.extensions.describe(),
            });
        };

        Ok(Some(ExportDestination {
            path: PathBuf::from(destination),
            extension,
            format,
        }))
    }
}
