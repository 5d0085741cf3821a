//! Team member aggregate.

use super::{MemberId, MemberName, MemberStatus};
use crate::store::{Document, LocalKey};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::Value;

/// Parameters for adding a member to the team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    /// Display name.
    pub name: MemberName,
    /// Free-text role.
    pub role: String,
}

/// Team member aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub(super) id: Option<MemberId>,
    pub(super) key: LocalKey,
    pub(super) name: MemberName,
    pub(super) role: String,
    pub(super) status: MemberStatus,
    pub(super) progress: u8,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMemberData {
    /// Store identifier, if the member has been persisted.
    pub id: Option<MemberId>,
    /// Display name.
    pub name: MemberName,
    /// Free-text role.
    pub role: String,
    /// Last derived status.
    pub status: MemberStatus,
    /// Last derived progress percentage.
    pub progress: u8,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    /// Creates a new, not yet persisted member with no progress.
    #[must_use]
    pub fn new(member: NewMember, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self::from_persisted(PersistedMemberData {
            id: None,
            name: member.name,
            role: member.role.trim().to_owned(),
            status: MemberStatus::Offline,
            progress: 0,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a member from stored data. Progress is capped at 100.
    #[must_use]
    pub fn from_persisted(data: PersistedMemberData) -> Self {
        Self {
            id: data.id,
            key: LocalKey::new(),
            name: data.name,
            role: data.role,
            status: data.status,
            progress: data.progress.min(100),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the store identifier, or `None` before persistence.
    #[must_use]
    pub const fn id(&self) -> Option<&MemberId> {
        self.id.as_ref()
    }

    /// Returns the in-memory identity of the member.
    #[must_use]
    pub const fn local_key(&self) -> LocalKey {
        self.key
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &MemberName {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the last derived activity status.
    #[must_use]
    pub const fn status(&self) -> MemberStatus {
        self.status
    }

    /// Returns the last derived progress percentage.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the full store document for this member.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.insert("name".to_owned(), Value::from(self.name.as_str()));
        document.insert("role".to_owned(), Value::from(self.role.as_str()));
        document.insert("status".to_owned(), Value::from(self.status.as_str()));
        document.insert("progress".to_owned(), Value::from(self.progress));
        document.insert(
            "createdAt".to_owned(),
            Value::from(self.created_at.to_rfc3339()),
        );
        document.insert(
            "updatedAt".to_owned(),
            Value::from(self.updated_at.to_rfc3339()),
        );
        document
    }

    pub(crate) fn assign_id(&mut self, id: MemberId) {
        self.id = Some(id);
    }
}
