//! Validated export of the ROI to a flat image file
//!
//! The destination path goes through a fixed sequence of checks before any
//! pixel is extracted or written. Every failure is reported as a user-facing
//! message and only aborts the export step.

mod errors;
mod extensions;
mod check_file;
mod validator;
mod writer;

pub use errors::ExportError;
pub use extensions::AllowedExtensions;
pub use check_file::{check_file, FileMode};
pub use validator::{ExportDestination, ExportValidator};
pub use writer::ExportWriter;
