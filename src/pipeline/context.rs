//! Per-invocation state

use std::path::PathBuf;

use image::RgbImage;

use crate::annotation::GraphicStyle;
use crate::export::ExportError;
use crate::geometry::RoiRect;

/// Overlay the host should draw for a newly placed ROI
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub rect: RoiRect,
    pub style: GraphicStyle,
    pub name: String,
    pub description: String,
}

/// What happened to the export step
#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    /// Export not requested
    NotRequested,
    /// Skipped because nothing changed or no ROI was placed
    Skipped,
    /// The region was written
    Written {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    Failed(ExportError),
}

impl ExportStatus {
    /// Report line for this status, if it produces one
    pub fn report_line(&self) -> Option<String> {
        match self {
            ExportStatus::NotRequested | ExportStatus::Skipped => None,
            ExportStatus::Written { path, width, height } =>
                Some(format!("Saved {}x{} region to {}", width, height, path.display())),
            ExportStatus::Failed(error) => Some(error.to_string()),
        }
    }
}

/// Values produced while an invocation runs
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Whether the change detector let this invocation recompute
    pub changed: bool,
    /// ROI side length used for this invocation
    pub roi_size: u32,
    /// ROI placed this invocation
    pub roi: Option<RoiRect>,
    /// Overlay name shown in the report
    pub overlay_name: String,
    /// Annotation count seen before placeholders were collapsed
    pub overlay_count: usize,
    pub export: ExportStatus,
}

impl InvocationContext {
    pub fn new(changed: bool, roi_size: u32) -> Self {
        InvocationContext {
            changed,
            roi_size,
            roi: None,
            overlay_name: String::new(),
            overlay_count: 0,
            export: ExportStatus::NotRequested,
        }
    }
}

/// Everything an invocation hands back to the host
#[derive(Debug, Clone)]
pub struct InvocationOutcome {
    pub changed: bool,
    pub roi: Option<RoiRect>,
    /// Overlay to draw, present when a ROI was placed
    pub overlay: Option<Overlay>,
    /// Pixels under the ROI, extracted once for preview and export
    pub preview: Option<RgbImage>,
    pub export: ExportStatus,
    /// Number of annotations stored after reconciliation
    pub stored_count: usize,
    /// Text report for the host's output panel
    pub report: String,
}
