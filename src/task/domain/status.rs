//! Canonical task status and legacy status migration.

use super::ParseTaskFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task lifecycle status.
///
/// The four values form a cycle used by [`TaskStatus::advance`]:
/// `TODO → IN_PROGRESS → FOR_DEPLOYMENT → DEPLOYED → TODO`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished and waiting to ship.
    ForDeployment,
    /// Work has shipped. The only status that counts as completed.
    Deployed,
}

impl TaskStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Todo,
        Self::InProgress,
        Self::ForDeployment,
        Self::Deployed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::ForDeployment => "FOR_DEPLOYMENT",
            Self::Deployed => "DEPLOYED",
        }
    }

    /// Returns the next status in the lifecycle cycle.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::ForDeployment,
            Self::ForDeployment => Self::Deployed,
            Self::Deployed => Self::Todo,
        }
    }

    /// Returns `true` when the status counts as completed.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Deployed)
    }

    /// Maps any known historical status token onto a canonical status.
    ///
    /// Case, surrounding whitespace, and `_`/`-` separators are ignored.
    /// Unknown tokens map to [`TaskStatus::Todo`].
    #[must_use]
    pub fn from_legacy(raw: &str) -> Self {
        Self::try_from(raw).unwrap_or(Self::Todo)
    }

    /// Normalizes a raw record's status.
    ///
    /// A present, non-blank status token wins. Records without one fall back
    /// to the legacy `completed` flag.
    #[must_use]
    pub fn normalize(raw: Option<&str>, legacy_completed: Option<bool>) -> Self {
        match raw.map(str::trim).filter(|token| !token.is_empty()) {
            Some(token) => Self::from_legacy(token),
            None if legacy_completed == Some(true) => Self::Deployed,
            None => Self::Todo,
        }
    }
}

/// Lowercases a token and collapses separators into single spaces.
fn fold_token(raw: &str) -> String {
    raw.to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match fold_token(value).as_str() {
            "todo" | "to do" | "pending" => Ok(Self::Todo),
            "in progress" | "inprogress" => Ok(Self::InProgress),
            "for deployment" | "to be deployed" => Ok(Self::ForDeployment),
            "deployed" | "completed" | "done" => Ok(Self::Deployed),
            _ => Err(ParseTaskFieldError::new("status", value)),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
