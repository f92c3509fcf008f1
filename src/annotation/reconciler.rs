//! Annotation reconciliation
//!
//! When the user finishes drawing, the viewer stores a bare placeholder
//! overlay before the pipeline gets to label it. Reconciliation appends the
//! labelled ROI record and collapses every placeholder that is immediately
//! followed by its labelled counterpart, leaving unrelated records alone.

use log::{debug, info};

use crate::geometry::RoiRect;
use super::record::{AnnotationRecord, GeometryKind, GraphicStyle, DESCRIPTION_PREFIX};

/// Result of one reconciliation pass
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The sequence to write back to the store
    pub records: Vec<AnnotationRecord>,
    /// The ROI record appended this pass, if any
    pub appended: Option<AnnotationRecord>,
    /// Number of records in the sequence before placeholders were collapsed
    pub seen_count: usize,
    /// Number of placeholders dropped
    pub dropped: usize,
}

/// Folds a freshly placed ROI into a stored annotation sequence
#[derive(Debug, Clone)]
pub struct AnnotationReconciler {
    /// Fragment appended to the description prefix of new ROI records
    description_fragment: String,
}

impl AnnotationReconciler {
    /// Create a reconciler labelling ROIs with `description_fragment`
    pub fn new(description_fragment: &str) -> Self {
        AnnotationReconciler {
            description_fragment: description_fragment.to_string(),
        }
    }

    /// Full description written on new ROI records
    pub fn description(&self) -> String {
        format!("{}{}", DESCRIPTION_PREFIX, self.description_fragment)
    }

    /// Build the record for `roi`, inheriting from the last stored record
    ///
    /// Name, style and geometry kind come from the last record of `records`.
    /// With an empty sequence the record gets an empty name, the default
    /// style and rectangle geometry.
    pub fn build_roi_record(&self, records: &[AnnotationRecord], roi: &RoiRect) -> AnnotationRecord {
        let (name, style, geometry) = match records.last() {
            Some(last) => (last.name.clone(), last.style.clone(), last.geometry.clone()),
            None => (String::new(), GraphicStyle::default(), GeometryKind::Rectangle),
        };

        AnnotationRecord::new(&name, style, geometry, vec![roi.corners()])
            .with_description(&self.description())
    }

    /// Append the ROI record (when given) and collapse placeholders
    pub fn reconcile(&self, mut records: Vec<AnnotationRecord>, roi: Option<&RoiRect>) -> Reconciliation {
        let appended = roi.map(|roi| {
            let record = self.build_roi_record(&records, roi);
            info!("Appending ROI record '{}' ({})", record.name, record.description);
            records.push(record.clone());
            record
        });

        let seen_count = records.len();
        let records = collapse_placeholders(records);
        let dropped = seen_count - records.len();

        debug!("Reconciled {} annotations into {}, dropped {} placeholders",
               seen_count, records.len(), dropped);

        Reconciliation {
            records,
            appended,
            seen_count,
            dropped,
        }
    }
}

/// Drop each placeholder directly followed by a labelled record of the same name
///
/// Order is preserved and the final record is always kept.
pub fn collapse_placeholders(records: Vec<AnnotationRecord>) -> Vec<AnnotationRecord> {
    let mut kept = Vec::with_capacity(records.len());
    let mut iter = records.into_iter().peekable();

    while let Some(record) = iter.next() {
        let superseded = iter.peek().is_some_and(|next| supersedes(next, &record));
        if superseded {
            debug!("Dropping placeholder '{}'", record.name);
            continue;
        }
        kept.push(record);
    }

    kept
}

/// Whether `labelled` replaces the placeholder `candidate` stored just before it
fn supersedes(labelled: &AnnotationRecord, candidate: &AnnotationRecord) -> bool {
    candidate.is_placeholder()
        && candidate.name == labelled.name
        && labelled.is_labelled()
}
