//! Custom error types for ROI placement and session handling

use std::fmt;
use std::io;

/// Errors that abort an invocation or a host command
#[derive(Debug)]
pub enum BoxDropError {
    /// I/O error
    IoError(io::Error),
    /// The session file could not be parsed or serialized
    SessionFormat(String),
    /// The pixel source or an image encoder failed
    ImageError(String),
    /// Invalid configuration value or file
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for BoxDropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxDropError::IoError(e) => write!(f, "I/O error: {}", e),
            BoxDropError::SessionFormat(msg) => write!(f, "Malformed session: {}", msg),
            BoxDropError::ImageError(msg) => write!(f, "Image error: {}", msg),
            BoxDropError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BoxDropError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BoxDropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoxDropError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BoxDropError {
    fn from(error: io::Error) -> Self {
        BoxDropError::IoError(error)
    }
}

impl From<image::ImageError> for BoxDropError {
    fn from(error: image::ImageError) -> Self {
        BoxDropError::ImageError(error.to_string())
    }
}

impl From<quick_xml::Error> for BoxDropError {
    fn from(error: quick_xml::Error) -> Self {
        BoxDropError::SessionFormat(error.to_string())
    }
}

impl From<String> for BoxDropError {
    fn from(msg: String) -> Self {
        BoxDropError::GenericError(msg)
    }
}

/// Result type for BoxDrop operations
pub type BoxDropResult<T> = Result<T, BoxDropError>;
