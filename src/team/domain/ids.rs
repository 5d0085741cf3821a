//! Identifier type for team member records.

use crate::store::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a persisted team member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(DocumentId);

impl MemberId {
    /// Creates a member identifier from a raw store identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(DocumentId::new(value))
    }

    /// Returns the underlying document identifier.
    #[must_use]
    pub const fn as_document_id(&self) -> &DocumentId {
        &self.0
    }
}

impl From<DocumentId> for MemberId {
    fn from(id: DocumentId) -> Self {
        Self(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
