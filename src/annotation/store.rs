//! Annotation store interface
//!
//! A store holds the ordered annotation sequence of one image. The pipeline
//! drives it through a strict `load`, `replace`, `persist` cycle once per
//! invocation.

use log::debug;

use crate::errors::BoxDropResult;
use super::record::AnnotationRecord;

/// Durable home of an image's annotation sequence
pub trait AnnotationStore {
    /// Identifier of the image source the annotations belong to
    fn source_id(&self) -> &str;

    /// Read the full ordered sequence
    ///
    /// Staged but unpersisted changes are discarded.
    fn load(&mut self) -> BoxDropResult<Vec<AnnotationRecord>>;

    /// Stage a new sequence to be written by the next `persist`
    fn replace(&mut self, records: Vec<AnnotationRecord>);

    /// Write the staged sequence durably
    ///
    /// Persisting with nothing staged rewrites the last loaded sequence.
    fn persist(&mut self) -> BoxDropResult<()>;
}

/// Store kept entirely in memory
///
/// Useful for hosts that own persistence themselves, and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    source_id: String,
    persisted: Vec<AnnotationRecord>,
    staged: Option<Vec<AnnotationRecord>>,
    persist_count: usize,
}

impl MemoryStore {
    /// Create a store pre-filled with `records`
    pub fn new(source_id: &str, records: Vec<AnnotationRecord>) -> Self {
        MemoryStore {
            source_id: source_id.to_string(),
            persisted: records,
            staged: None,
            persist_count: 0,
        }
    }

    /// The last persisted sequence
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.persisted
    }

    /// Number of completed `persist` calls
    pub fn persist_count(&self) -> usize {
        self.persist_count
    }

    /// Simulate the viewer appending an overlay between invocations
    pub fn push(&mut self, record: AnnotationRecord) {
        self.persisted.push(record);
    }
}

impl AnnotationStore for MemoryStore {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn load(&mut self) -> BoxDropResult<Vec<AnnotationRecord>> {
        self.staged = None;
        Ok(self.persisted.clone())
    }

    fn replace(&mut self, records: Vec<AnnotationRecord>) {
        self.staged = Some(records);
    }

    fn persist(&mut self) -> BoxDropResult<()> {
        if let Some(records) = self.staged.take() {
            self.persisted = records;
        }
        self.persist_count += 1;
        debug!("Persisted {} annotations for {}", self.persisted.len(), self.source_id);
        Ok(())
    }
}
