//! Team member operations of the board service.

use super::BoardService;
use crate::board::error::{BoardError, BoardResult};
use crate::store::{DocumentStore, EntityKind};
use crate::team::domain::{MemberId, MemberName, MemberPatch, NewMember, TeamMember};
use mockable::Clock;

/// Request payload for editing a member's name and role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateMemberRequest {
    name: Option<String>,
    role: Option<String>,
}

impl UpdateMemberRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the member.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Changes the member's role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl<S, C> BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Adds a team member, showing them before the store confirms.
    ///
    /// Tasks already naming the member count toward their progress at once.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or taken name, or the store
    /// error after the member has been removed again.
    pub async fn add_member(&self, name: &str, role: &str) -> BoardResult<TeamMember> {
        let member_name = MemberName::new(name)?;
        self.ensure_name_free(&member_name, None)?;
        let member = TeamMember::new(
            NewMember {
                name: member_name,
                role: role.to_owned(),
            },
            &*self.clock,
        );
        let created = self.insert_then_create(member).await?;
        tracing::info!(member = %created.name(), "member added");
        self.sync_member_progress().await;
        Ok(created)
    }

    /// Edits a member's name or role. Progress and status are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RoleLocked`] when changing the role of a
    /// reserved member, [`BoardError::DuplicateMemberName`] when the new
    /// name is taken, or the store error after rollback.
    pub async fn update_member(
        &self,
        id: &MemberId,
        request: UpdateMemberRequest,
    ) -> BoardResult<TeamMember> {
        let current = self
            .read_state()
            .find::<TeamMember>(id)
            .cloned()
            .ok_or_else(|| not_found(id))?;

        let mut patch = MemberPatch::new();
        if let Some(raw) = request.name {
            let name = MemberName::new(raw)?;
            self.ensure_name_free(&name, Some(id))?;
            patch = patch.with_name(name);
        }
        if let Some(role) = request.role {
            if role.trim() != current.role() && self.config.is_role_locked(current.name()) {
                return Err(BoardError::RoleLocked(current.name().clone()));
            }
            patch = patch.with_role(role);
        }

        let renamed = patch.name().is_some_and(|name| name != current.name());
        let updated = self.apply_then_persist::<TeamMember>(id, patch).await?;
        if renamed {
            tracing::info!(from = %current.name(), to = %updated.name(), "member renamed");
            self.sync_member_progress().await;
        }
        Ok(updated)
    }

    /// Removes a member, hiding them before the store confirms.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MemberHasAssignedTasks`] while any task names
    /// the member, or the store error after the member has been put back.
    pub async fn delete_member(&self, id: &MemberId) -> BoardResult<()> {
        let (name, count) = {
            let state = self.read_state();
            let member = state
                .find::<TeamMember>(id)
                .ok_or_else(|| not_found(id))?;
            let assigned = state
                .tasks()
                .iter()
                .filter(|task| task.is_assigned_to(member.name().as_str()))
                .count();
            (member.name().clone(), assigned)
        };
        if count > 0 {
            return Err(BoardError::MemberHasAssignedTasks { name, count });
        }
        self.remove_then_delete::<TeamMember>(id).await?;
        tracing::info!(member = %name, "member removed");
        Ok(())
    }

    fn ensure_name_free(&self, name: &MemberName, except: Option<&MemberId>) -> BoardResult<()> {
        let taken = self.read_state().members().iter().any(|member| {
            member.name() == name && (except.is_none() || member.id() != except)
        });
        if taken {
            return Err(BoardError::DuplicateMemberName(name.clone()));
        }
        Ok(())
    }
}

fn not_found(id: &MemberId) -> BoardError {
    BoardError::NotFound {
        kind: EntityKind::TeamMember,
        id: id.as_document_id().clone(),
    }
}
