//! Error types for team member validation and parsing.

use thiserror::Error;

/// Errors returned while constructing team member values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemberDomainError {
    /// The member name is empty after trimming.
    #[error("member name must not be empty")]
    EmptyName,
}

/// Error returned while parsing a member status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown member status: {0}")]
pub struct ParseMemberStatusError(pub String);
