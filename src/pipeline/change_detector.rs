//! Change detection between invocations

use log::debug;

use super::parameters::{InputAnnotation, PipelineParameters};

/// Host "changed since last read" flags of the watched parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeFlags {
    pub description: bool,
    pub input_annotation: bool,
    pub export_requested: bool,
    pub destination: bool,
}

impl ChangeFlags {
    /// Flags with every watched parameter marked as changed
    pub fn all() -> Self {
        ChangeFlags {
            description: true,
            input_annotation: true,
            export_requested: true,
            destination: true,
        }
    }

    pub fn any(&self) -> bool {
        self.description || self.input_annotation || self.export_requested || self.destination
    }
}

/// Watched parameter values at the end of an invocation
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    description: String,
    input_annotation: Option<InputAnnotation>,
    export_requested: bool,
    destination: String,
}

impl Snapshot {
    fn of(params: &PipelineParameters) -> Self {
        Snapshot {
            description: params.description.clone(),
            input_annotation: params.input_annotation.clone(),
            export_requested: params.export_requested,
            destination: params.destination.clone(),
        }
    }
}

/// Decides whether an invocation must recompute and re-export
///
/// The ROI size is not watched: changing it alone does not trigger a new
/// placement.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last: Option<Snapshot>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        ChangeDetector::default()
    }

    /// Whether this invocation counts as changed
    ///
    /// True when the host flags a watched parameter, when a watched value
    /// differs from the previous invocation, or when there is no cached
    /// export handle.
    pub fn evaluate(&self, params: &PipelineParameters, flags: &ChangeFlags, handle_present: bool) -> bool {
        if !handle_present {
            debug!("No export handle cached, treating invocation as changed");
            return true;
        }

        if flags.any() {
            debug!("Host reported changed parameters: {:?}", flags);
            return true;
        }

        match &self.last {
            Some(last) => {
                let changed = *last != Snapshot::of(params);
                debug!("Parameters changed since last invocation: {}", changed);
                changed
            },
            None => true,
        }
    }

    /// Remember the watched values at the end of an invocation
    pub fn commit(&mut self, params: &PipelineParameters) {
        self.last = Some(Snapshot::of(params));
    }
}
