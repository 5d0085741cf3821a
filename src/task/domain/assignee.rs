//! Name-based reference from a task to a team member.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-owning reference to a team member by display name.
///
/// The relation is resolved at read time by comparing names; nothing keeps
/// it consistent when members are renamed or removed. A reference whose name
/// matches no member leaves the task effectively unassigned for progress
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssigneeRef(String);

impl AssigneeRef {
    /// Creates a reference from a raw name.
    ///
    /// Returns `None` for blank input, which means "unassigned".
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Returns the referenced name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the reference resolves to the given member name.
    #[must_use]
    pub fn refers_to(&self, member_name: &str) -> bool {
        self.0 == member_name
    }
}

impl AsRef<str> for AssigneeRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AssigneeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
