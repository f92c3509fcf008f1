pub mod errors;
pub mod config;
pub mod geometry;
pub mod annotation;
pub mod pixel;
pub mod export;
pub mod pipeline;
pub mod commands;
pub mod utils;

#[cfg(test)]
mod tests;

pub use errors::{BoxDropError, BoxDropResult};
pub use config::BoxDropConfig;
pub use geometry::{BoundingBox, ExtentCalculator, Point, RoiRect};
pub use annotation::{AnnotationRecord, AnnotationReconciler, AnnotationStore, MemoryStore, SessionFileStore};
pub use export::{check_file, AllowedExtensions, ExportError, FileMode};
pub use pipeline::{BoxDrop, ChangeFlags, InputAnnotation, InvocationOutcome, PipelineParameters};
