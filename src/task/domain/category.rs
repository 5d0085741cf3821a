//! Task category and legacy project migration.

use super::ParseTaskFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Area of the codebase a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Client-facing work.
    #[default]
    Frontend,
    /// Server-side work.
    Backend,
}

impl Category {
    /// Both categories.
    pub const ALL: [Self; 2] = [Self::Frontend, Self::Backend];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }

    /// Maps a raw category or legacy project identifier onto a category.
    ///
    /// Legacy projects `r3` and `r8-250` were client work, `r8-125` and
    /// `other` server work. Missing or unrecognized values map to
    /// [`Category::Frontend`].
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(token) = raw.map(|value| value.trim().to_ascii_lowercase()) else {
            return Self::Frontend;
        };
        match token.as_str() {
            "backend" | "r8-125" | "other" => Self::Backend,
            _ => Self::Frontend,
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            _ => Err(ParseTaskFieldError::new("category", value)),
        }
    }
}

impl FromStr for Category {
    type Err = ParseTaskFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
