//! Pipeline parameters supplied by the host

use log::warn;

use crate::config::BoxDropConfig;
use crate::geometry::{BoundingBox, Point};

/// The user-drawn annotation a ROI is placed on
#[derive(Debug, Clone, PartialEq)]
pub struct InputAnnotation {
    /// Host identifier of the annotation
    pub id: String,
    /// Polygon point lists of the drawn shape
    pub polygons: Vec<Vec<Point>>,
}

impl InputAnnotation {
    pub fn new(id: &str, polygons: Vec<Vec<Point>>) -> Self {
        InputAnnotation {
            id: id.to_string(),
            polygons,
        }
    }

    /// An annotation covering a bounding box
    pub fn from_bbox(id: &str, bbox: &BoundingBox) -> Self {
        InputAnnotation::new(id, vec![bbox.to_polygon()])
    }
}

/// Current values of the host's parameter widgets
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParameters {
    /// ROI side length in pixels
    pub roi_size: u32,
    /// Description fragment written after the "Cellularity: " prefix
    pub description: String,
    /// Annotation the ROI is centered on, if the user drew one
    pub input_annotation: Option<InputAnnotation>,
    pub export_requested: bool,
    /// Destination file of the export
    pub destination: String,
}

impl PipelineParameters {
    /// Parameters with the configured defaults and nothing selected
    pub fn new(config: &BoxDropConfig) -> Self {
        PipelineParameters {
            roi_size: config.default_roi_size,
            description: config.default_description.clone(),
            input_annotation: None,
            export_requested: false,
            destination: String::new(),
        }
    }

    /// Builder-style setter for the input annotation
    pub fn with_annotation(mut self, annotation: InputAnnotation) -> Self {
        self.input_annotation = Some(annotation);
        self
    }

    /// Builder-style setter requesting an export to `destination`
    pub fn with_export(mut self, destination: &str) -> Self {
        self.export_requested = true;
        self.destination = destination.to_string();
        self
    }
}

/// Valid range of the ROI size for an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterBounds {
    pub min_size: u32,
    pub max_size: u32,
}

impl ParameterBounds {
    /// Bounds for an image: one pixel up to its smaller side
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        ParameterBounds {
            min_size: 1,
            max_size: width.min(height).max(1),
        }
    }

    /// Clamp `size` into bounds, warning when it had to change
    pub fn clamp_size(&self, size: u32) -> u32 {
        let clamped = size.clamp(self.min_size, self.max_size);
        if clamped != size {
            warn!("ROI size {} outside [{}, {}], using {}", size, self.min_size, self.max_size, clamped);
        }
        clamped
    }
}
