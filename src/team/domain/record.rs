//! Raw member documents.

use super::{MemberId, MemberName, MemberStatus, PersistedMemberData, TeamMember};
use crate::store::{Document, read_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A member record exactly as found in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDocument {
    /// Display name.
    pub name: Option<String>,
    /// Free-text role.
    pub role: Option<String>,
    /// Raw status.
    pub status: Option<String>,
    /// Raw progress percentage.
    pub progress: Option<Value>,
    /// Creation timestamp as RFC 3339.
    pub created_at: Option<Value>,
    /// Modification timestamp as RFC 3339.
    pub updated_at: Option<Value>,
}

impl MemberDocument {
    /// Reads a raw document.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when a field has the wrong JSON
    /// type.
    pub fn from_document(document: &Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(document.clone()))
    }

    /// Converts the record into a member.
    ///
    /// Returns `None` for records without a usable name, which cannot take
    /// part in the name-based task join. Unknown statuses become
    /// [`MemberStatus::Offline`]; the next progress sync corrects them.
    #[must_use]
    pub fn into_member(self, id: MemberId, fallback_time: DateTime<Utc>) -> Option<TeamMember> {
        let name = MemberName::new(self.name?).ok()?;
        let status = self
            .status
            .as_deref()
            .and_then(|raw| MemberStatus::try_from(raw).ok())
            .unwrap_or_default();
        let created_at = self
            .created_at
            .as_ref()
            .and_then(read_timestamp)
            .unwrap_or(fallback_time);
        let updated_at = self
            .updated_at
            .as_ref()
            .and_then(read_timestamp)
            .unwrap_or(created_at);

        Some(TeamMember::from_persisted(PersistedMemberData {
            id: Some(id),
            name,
            role: self.role.unwrap_or_default(),
            status,
            progress: clamp_progress(self.progress),
            created_at,
            updated_at,
        }))
    }
}

/// Reads a stored percentage. Anything but a non-negative integer reads as
/// zero; the next progress sync rewrites it anyway.
fn clamp_progress(raw: Option<Value>) -> u8 {
    raw.as_ref()
        .and_then(Value::as_u64)
        .map_or(0, |value| u8::try_from(value.min(100)).unwrap_or(100))
}
