//! Board configuration.

use crate::task::domain::{Category, Priority};
use crate::team::domain::MemberName;
use serde::{Deserialize, Serialize};

/// Tunables of the board service.
///
/// Missing keys take their default when read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Members whose role cannot be edited.
    pub reserved_role_names: Vec<String>,
    /// Priority given to records that carry none.
    pub default_priority: Priority,
    /// Category of quick-added tasks when no category filter is active.
    pub quick_add_category: Category,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            reserved_role_names: vec!["Sir Rey".to_owned(), "Rhea".to_owned()],
            default_priority: Priority::Medium,
            quick_add_category: Category::Frontend,
        }
    }
}

impl BoardConfig {
    /// Reads a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON or mistyped values.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Returns `true` when the member's role is read-only.
    #[must_use]
    pub fn is_role_locked(&self, name: &MemberName) -> bool {
        self.reserved_role_names
            .iter()
            .any(|reserved| reserved.trim() == name.as_str())
    }
}
