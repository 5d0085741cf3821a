//! Composable task filters for the task list.

use crate::task::domain::{Category, Priority, Task, TaskDocument, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a filter key from the UI is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} filter: {value}")]
pub struct ParseFilterError {
    kind: &'static str,
    value: String,
}

/// Status-tab selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks in [`TaskStatus::Todo`].
    Todo,
    /// Tasks in [`TaskStatus::InProgress`].
    InProgress,
    /// Tasks in [`TaskStatus::ForDeployment`].
    ForDeployment,
    /// Tasks in [`TaskStatus::Deployed`]. The legacy `completed` tab maps
    /// here.
    Deployed,
    /// Tasks that are not deployed, whatever their status.
    Pending,
    /// High-priority tasks, whatever their status.
    HighPriority,
    /// Overdue tasks, whatever their status.
    Overdue,
}

impl TabFilter {
    /// Returns the UI key of the tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::ForDeployment => "for-deployment",
            Self::Deployed => "deployed",
            Self::Pending => "pending",
            Self::HighPriority => "high-priority",
            Self::Overdue => "overdue",
        }
    }

    /// Returns `true` when the task belongs on this tab.
    #[must_use]
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Todo => task.status() == TaskStatus::Todo,
            Self::InProgress => task.status() == TaskStatus::InProgress,
            Self::ForDeployment => task.status() == TaskStatus::ForDeployment,
            Self::Deployed => task.status() == TaskStatus::Deployed,
            Self::Pending => !task.completed(),
            Self::HighPriority => task.priority() == Priority::High,
            Self::Overdue => task.is_overdue(today),
        }
    }
}

impl FromStr for TabFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "for-deployment" => Ok(Self::ForDeployment),
            "deployed" | "completed" => Ok(Self::Deployed),
            "pending" => Ok(Self::Pending),
            "high-priority" => Ok(Self::HighPriority),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseFilterError {
                kind: "tab",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for TabFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignee selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MemberFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks whose assignee name equals the given name.
    Member(String),
}

impl MemberFilter {
    /// Selects tasks assigned to `name`.
    #[must_use]
    pub fn member(name: impl Into<String>) -> Self {
        Self::Member(name.into())
    }

    /// Returns `true` when the task passes this selector.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Member(name) => task.is_assigned_to(name),
        }
    }
}

impl FromStr for MemberFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::member(trimmed))
        }
    }
}

/// Category selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` when the task passes this selector.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => task.category() == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Category::try_from(s)
            .map(Self::Only)
            .map_err(|_| ParseFilterError {
                kind: "category",
                value: s.to_owned(),
            })
    }
}

/// The three independent selectors of the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Status tab.
    pub tab: TabFilter,
    /// Assignee.
    pub member: MemberFilter,
    /// Category.
    pub category: CategoryFilter,
}

impl TaskFilter {
    /// Creates a filter that keeps every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the tab selector.
    #[must_use]
    pub const fn with_tab(mut self, tab: TabFilter) -> Self {
        self.tab = tab;
        self
    }

    /// Sets the assignee selector.
    #[must_use]
    pub fn with_member(mut self, member: MemberFilter) -> Self {
        self.member = member;
        self
    }

    /// Sets the category selector.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Returns `true` when the task passes all three selectors.
    #[must_use]
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        self.tab.matches(task, today) && self.member.matches(task) && self.category.matches(task)
    }
}

/// Returns the tasks passing `filter`, in their original order.
///
/// Stages run tab first, then member, then category. The input is never
/// modified.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter, today: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.tab.matches(task, today))
        .filter(|task| filter.member.matches(task))
        .filter(|task| filter.category.matches(task))
        .collect()
}

/// Filters raw, possibly unmigrated documents.
///
/// Each document is normalized before the selectors run, so legacy status
/// and category encodings are matched by their canonical meaning. The
/// returned tasks carry no store identifier.
#[must_use]
pub fn filter_documents(
    documents: &[TaskDocument],
    filter: &TaskFilter,
    today: NaiveDate,
) -> Vec<Task> {
    documents
        .iter()
        .cloned()
        .map(|document| document.into_task(None, Priority::default(), DateTime::<Utc>::UNIX_EPOCH))
        .filter(|task| filter.matches(task, today))
        .collect()
}

/// Which tabs contain tasks for a selected member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberTabIndicators {
    /// The member has tasks that are not deployed.
    pub pending: bool,
    /// The member has deployed tasks.
    pub completed: bool,
    /// The member has overdue tasks.
    pub overdue: bool,
}

/// Computes tab indicators for the tasks assigned to `member_name`.
#[must_use]
pub fn member_tab_indicators(
    tasks: &[Task],
    member_name: &str,
    today: NaiveDate,
) -> MemberTabIndicators {
    tasks
        .iter()
        .filter(|task| task.is_assigned_to(member_name))
        .fold(MemberTabIndicators::default(), |acc, task| {
            MemberTabIndicators {
                pending: acc.pending || !task.completed(),
                completed: acc.completed || task.completed(),
                overdue: acc.overdue || task.is_overdue(today),
            }
        })
}
