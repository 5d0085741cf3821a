//! Identifier type for task records.

use crate::store::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(DocumentId);

impl TaskId {
    /// Creates a task identifier from a raw store identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(DocumentId::new(value))
    }

    /// Returns the underlying document identifier.
    #[must_use]
    pub const fn as_document_id(&self) -> &DocumentId {
        &self.0
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<DocumentId> for TaskId {
    fn from(id: DocumentId) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
