//! Export step failures
//!
//! The `Display` text of each variant is shown to the user verbatim.

use std::fmt;

/// Why the export step did not produce a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Export was requested without a destination
    BlankDestination,
    /// The writability probe rejected the destination
    UnwritableDestination(String),
    /// The destination suffix is not in the allowed set
    InvalidExtension {
        extension: String,
        allowed: String,
    },
    /// Extraction or encoding failed after validation passed
    ExportWriteFailure {
        path: String,
        reason: String,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::BlankDestination =>
                write!(f, "The filename is blank. Choose a file to save the region to."),
            ExportError::UnwritableDestination(path) =>
                write!(f, "The file name '{}' cannot be written to.", path),
            ExportError::InvalidExtension { extension, allowed } =>
                write!(f, "The extension '{}' is not a valid type. Save as {}.", extension, allowed),
            ExportError::ExportWriteFailure { path, reason } =>
                write!(f, "Failed to write the region to '{}': {}", path, reason),
        }
    }
}

impl std::error::Error for ExportError {}
