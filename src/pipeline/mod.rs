//! The ROI placement pipeline
//!
//! One invocation runs, in order: change detection, ROI placement,
//! annotation reconciliation, the optional export, and the report. All state
//! produced along the way lives in an [`InvocationContext`] that is dropped at
//! the end of the run; only the export handle and the change snapshot survive
//! between invocations.

mod parameters;
mod change_detector;
mod context;
mod report;
mod boxdrop;

pub use parameters::{InputAnnotation, ParameterBounds, PipelineParameters};
pub use change_detector::{ChangeDetector, ChangeFlags};
pub use context::{ExportStatus, InvocationContext, InvocationOutcome, Overlay};
pub use report::ReportGenerator;
pub use boxdrop::BoxDrop;
