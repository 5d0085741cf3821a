//! Field-level member changes and their reversal.

use super::{MemberName, MemberStatus, TeamMember};
use crate::field::{hand_down, restore, supersede, swap};
use crate::store::Document;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A partial change to a team member. Unset fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberPatch {
    name: Option<MemberName>,
    role: Option<String>,
    status: Option<MemberStatus>,
    progress: Option<u8>,
    updated_at: Option<DateTime<Utc>>,
}

impl MemberPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the member.
    #[must_use]
    pub fn with_name(mut self, name: MemberName) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into().trim().to_owned());
        self
    }

    /// Sets the derived progress fields. Progress is capped at 100.
    #[must_use]
    pub fn with_progress(mut self, progress: u8, status: MemberStatus) -> Self {
        self.progress = Some(progress.min(100));
        self.status = Some(status);
        self
    }

    pub(crate) fn touched_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Returns the new name, if the patch renames the member.
    #[must_use]
    pub const fn name(&self) -> Option<&MemberName> {
        self.name.as_ref()
    }

    /// Returns the new role, if the patch sets one.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns `true` when applying the patch to `member` would change
    /// nothing besides the modification time.
    #[must_use]
    pub fn is_noop_for(&self, member: &TeamMember) -> bool {
        self.name.as_ref().is_none_or(|name| *name == member.name)
            && self.role.as_ref().is_none_or(|role| *role == member.role)
            && self.status.is_none_or(|status| status == member.status)
            && self
                .progress
                .is_none_or(|progress| progress == member.progress)
    }

    pub(crate) fn apply_to(&self, member: &mut TeamMember) -> Self {
        Self {
            name: swap(&mut member.name, self.name.as_ref()),
            role: swap(&mut member.role, self.role.as_ref()),
            status: swap(&mut member.status, self.status.as_ref()),
            progress: swap(&mut member.progress, self.progress.as_ref()),
            updated_at: swap(&mut member.updated_at, self.updated_at.as_ref()),
        }
    }

    pub(crate) fn revert(&self, member: &mut TeamMember, previous: &Self) {
        restore(&mut member.name, self.name.as_ref(), previous.name.as_ref());
        restore(&mut member.role, self.role.as_ref(), previous.role.as_ref());
        restore(
            &mut member.status,
            self.status.as_ref(),
            previous.status.as_ref(),
        );
        restore(
            &mut member.progress,
            self.progress.as_ref(),
            previous.progress.as_ref(),
        );
        restore(
            &mut member.updated_at,
            self.updated_at.as_ref(),
            previous.updated_at.as_ref(),
        );
    }

    /// Moves this fallback patch's fields that `later` also wrote into
    /// `fallback`, the fallback patch of `later`.
    pub(crate) fn hand_down(&mut self, later: &Self, fallback: &mut Self) {
        hand_down(&mut self.name, later.name.as_ref(), &mut fallback.name);
        hand_down(&mut self.role, later.role.as_ref(), &mut fallback.role);
        hand_down(&mut self.status, later.status.as_ref(), &mut fallback.status);
        hand_down(&mut self.progress, later.progress.as_ref(), &mut fallback.progress);
        hand_down(&mut self.updated_at, later.updated_at.as_ref(), &mut fallback.updated_at);
    }

    /// Drops this fallback patch's fields that `later` wrote.
    pub(crate) fn supersede(&mut self, later: &Self) {
        supersede(&mut self.name, later.name.as_ref());
        supersede(&mut self.role, later.role.as_ref());
        supersede(&mut self.status, later.status.as_ref());
        supersede(&mut self.progress, later.progress.as_ref());
        supersede(&mut self.updated_at, later.updated_at.as_ref());
    }

    /// Returns the partial store document for the set fields.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        if let Some(name) = &self.name {
            document.insert("name".to_owned(), Value::from(name.as_str()));
        }
        if let Some(role) = &self.role {
            document.insert("role".to_owned(), Value::from(role.as_str()));
        }
        if let Some(status) = self.status {
            document.insert("status".to_owned(), Value::from(status.as_str()));
        }
        if let Some(progress) = self.progress {
            document.insert("progress".to_owned(), Value::from(progress));
        }
        if let Some(updated_at) = self.updated_at {
            document.insert("updatedAt".to_owned(), Value::from(updated_at.to_rfc3339()));
        }
        document
    }
}
