//! Annotation record data model

use std::fmt;

use crate::geometry::Point;

/// Prefix written in front of the description fragment of a placed ROI
pub const DESCRIPTION_PREFIX: &str = "Cellularity: ";

/// Text that marks a record as labelled by this pipeline
pub const LABEL_MARKER: &str = "Cellularity:";

/// Opaque drawing style of an overlay
///
/// The pipeline never interprets the style; it only copies it from the
/// record a new ROI inherits from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphicStyle(pub String);

impl GraphicStyle {
    pub fn new(token: &str) -> Self {
        GraphicStyle(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kind of geometry an annotation was drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryKind {
    Rectangle,
    Polygon,
    Polyline,
    Ellipse,
    Point,
    /// Kind written by a newer viewer, preserved verbatim
    Other(String),
}

impl GeometryKind {
    /// Parse the session file spelling of a geometry kind
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "rectangle" => GeometryKind::Rectangle,
            "polygon" => GeometryKind::Polygon,
            "polyline" => GeometryKind::Polyline,
            "ellipse" => GeometryKind::Ellipse,
            "point" => GeometryKind::Point,
            _ => GeometryKind::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GeometryKind::Rectangle => "rectangle",
            GeometryKind::Polygon => "polygon",
            GeometryKind::Polyline => "polyline",
            GeometryKind::Ellipse => "ellipse",
            GeometryKind::Point => "point",
            GeometryKind::Other(name) => name,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One stored overlay of an image
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    /// Display name shown in the viewer's overlay list
    pub name: String,
    pub style: GraphicStyle,
    pub geometry: GeometryKind,
    /// Polygon point lists making up the shape
    pub points: Vec<Vec<Point>>,
    /// Free-text description; empty for viewer placeholders
    pub description: String,
}

impl AnnotationRecord {
    /// Create a record with no description
    pub fn new(name: &str, style: GraphicStyle, geometry: GeometryKind, points: Vec<Vec<Point>>) -> Self {
        AnnotationRecord {
            name: name.to_string(),
            style,
            geometry,
            points,
            description: String::new(),
        }
    }

    /// Builder-style setter for the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Whether the viewer stored this record before it was labelled
    pub fn is_placeholder(&self) -> bool {
        self.description.is_empty()
    }

    /// Whether this record carries a pipeline label
    pub fn is_labelled(&self) -> bool {
        self.description.contains(LABEL_MARKER)
    }

    /// Total number of vertices across all polygons
    pub fn vertex_count(&self) -> usize {
        self.points.iter().map(Vec::len).sum()
    }
}
