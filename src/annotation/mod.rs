//! Annotation records, their stores and the reconciliation pass
//!
//! The viewer keeps every overlay of an image in an ordered sequence. This
//! module models that sequence, the stores it is loaded from and saved to,
//! and the pass that folds viewer placeholders into labelled ROI records.

mod record;
mod store;
mod session_store;
mod reconciler;

pub use record::{AnnotationRecord, GeometryKind, GraphicStyle, DESCRIPTION_PREFIX, LABEL_MARKER};
pub use store::{AnnotationStore, MemoryStore};
pub use session_store::SessionFileStore;
pub use reconciler::{collapse_placeholders, AnnotationReconciler, Reconciliation};
