//! Service-level errors for board operations.

use crate::store::{DocumentId, EntityKind, StoreError};
use crate::task::domain::TaskDomainError;
use crate::team::domain::{MemberDomainError, MemberName};
use thiserror::Error;

/// Errors returned by board operations.
///
/// Validation errors are raised before any state changes. `NotFound` from
/// the in-memory apply aborts before the store is contacted. Store failures
/// are returned after the optimistic change has been undone.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task input failed validation.
    #[error(transparent)]
    Task(#[from] TaskDomainError),

    /// Member input failed validation.
    #[error(transparent)]
    Member(#[from] MemberDomainError),

    /// The target record is unknown, in memory or to the store.
    #[error("{kind} record not found: {id}")]
    NotFound {
        /// Record kind.
        kind: EntityKind,
        /// Requested identifier.
        id: DocumentId,
    },

    /// The store could not be reached.
    #[error(transparent)]
    StoreUnavailable(StoreError),

    /// The member still has tasks assigned by name.
    #[error("member '{name}' still has {count} assigned task(s)")]
    MemberHasAssignedTasks {
        /// Member name.
        name: MemberName,
        /// Number of tasks naming the member.
        count: usize,
    },

    /// Another member already uses the name.
    #[error("a member named '{0}' already exists")]
    DuplicateMemberName(MemberName),

    /// The member's role is read-only.
    #[error("the role of '{0}' cannot be changed")]
    RoleLocked(MemberName),
}

impl BoardError {
    /// Returns `true` for errors raised before any state change because the
    /// input was rejected.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Task(_)
                | Self::Member(_)
                | Self::MemberHasAssignedTasks { .. }
                | Self::DuplicateMemberName(_)
                | Self::RoleLocked(_)
        )
    }
}

impl From<StoreError> for BoardError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => Self::NotFound { kind, id },
            unavailable @ StoreError::Unavailable(_) => Self::StoreUnavailable(unavailable),
        }
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
