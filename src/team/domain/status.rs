//! Member activity status.

use super::ParseMemberStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity status of a team member, derived from assigned tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberStatus {
    /// Every assigned task is deployed.
    Online,
    /// Tasks are assigned and none is deployed yet.
    Busy,
    /// Some, but not all, assigned tasks are deployed.
    InProgress,
    /// No tasks are assigned.
    #[default]
    Offline,
}

impl MemberStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Busy => "busy",
            Self::InProgress => "in-progress",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MemberStatus {
    type Error = ParseMemberStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "online" => Ok(Self::Online),
            "busy" => Ok(Self::Busy),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "offline" => Ok(Self::Offline),
            _ => Err(ParseMemberStatusError(value.to_owned())),
        }
    }
}
