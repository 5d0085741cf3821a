//! Identifier and document types shared by every store-backed entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Schemaless record body as exchanged with the document store.
pub type Document = Map<String, Value>;

/// Kind of record held by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Task records.
    Task,
    /// Team member records.
    TeamMember,
}

impl EntityKind {
    /// Returns the collection name used by the store.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Task => "tasks",
            Self::TeamMember => "team_members",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Opaque identifier assigned by the document store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory identity of a record, stable before and after persistence.
///
/// Records that have not been persisted yet have no [`DocumentId`]; the local
/// key lets the board address them anyway, for example to undo an optimistic
/// insert whose persistence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalKey(Uuid);

impl LocalKey {
    /// Creates a new random local key.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocalKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document as returned by [`crate::store::DocumentStore::list_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Record body.
    pub document: Document,
}

impl StoredDocument {
    /// Pairs a document body with its identifier.
    #[must_use]
    pub const fn new(id: DocumentId, document: Document) -> Self {
        Self { id, document }
    }
}

/// Reads a stored timestamp.
///
/// Accepts RFC 3339 strings and the `{"seconds", "nanoseconds"}` objects
/// some stores write for native timestamps.
#[must_use]
pub fn read_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc)),
        Value::Object(fields) => {
            let seconds = fields.get("seconds").and_then(Value::as_i64)?;
            let nanos = fields
                .get("nanoseconds")
                .and_then(Value::as_u64)
                .and_then(|raw| u32::try_from(raw).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos)
        }
        _ => None,
    }
}
