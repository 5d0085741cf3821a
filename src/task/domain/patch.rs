//! Field-level task changes and their reversal.

use super::task::{
    ensure_has_text, write_assignee, write_due_date, write_status, write_timestamp,
};
use super::{AssigneeRef, Category, Priority, Task, TaskDomainError, TaskDraft, TaskStatus};
use crate::field::{hand_down, restore, supersede, swap};
use crate::store::Document;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// A partial change to a task. Unset fields are left untouched.
///
/// Applying a patch yields another patch holding the values it replaced,
/// which is what a failed persist restores.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    name: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    assignee: Option<Option<AssigneeRef>>,
    due_date: Option<Option<NaiveDate>>,
    priority: Option<Priority>,
    category: Option<Category>,
    updated_at: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch replacing every editable field with the draft's.
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            name: Some(draft.name.trim().to_owned()),
            description: Some(draft.description.trim().to_owned()),
            status: Some(draft.status),
            assignee: Some(draft.assignee),
            due_date: Some(draft.due_date),
            priority: Some(draft.priority),
            category: Some(draft.category),
            updated_at: None,
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into().trim().to_owned());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into().trim().to_owned());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Option<AssigneeRef>) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Stamps the modification time. Set by the board, never by callers.
    #[must_use]
    pub(crate) const fn touched_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Returns the status this patch writes, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns `true` when the patch changes the assignee or status, the
    /// inputs of member progress.
    #[must_use]
    pub const fn affects_progress(&self) -> bool {
        self.status.is_some() || self.assignee.is_some()
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks that the task would keep a name or description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTask`] when both would be blank.
    pub fn check(&self, task: &Task) -> Result<(), TaskDomainError> {
        let name = self.name.as_deref().unwrap_or(&task.name);
        let description = self.description.as_deref().unwrap_or(&task.description);
        ensure_has_text(name, description)
    }

    /// Writes the set fields into `task` and returns the values replaced.
    pub(crate) fn apply_to(&self, task: &mut Task) -> Self {
        Self {
            name: swap(&mut task.name, self.name.as_ref()),
            description: swap(&mut task.description, self.description.as_ref()),
            status: swap(&mut task.status, self.status.as_ref()),
            assignee: swap(&mut task.assignee, self.assignee.as_ref()),
            due_date: swap(&mut task.due_date, self.due_date.as_ref()),
            priority: swap(&mut task.priority, self.priority.as_ref()),
            category: swap(&mut task.category, self.category.as_ref()),
            updated_at: swap(&mut task.updated_at, self.updated_at.as_ref()),
        }
    }

    /// Restores `previous` for every field that still holds the value this
    /// patch wrote. Fields changed since by a newer patch are kept.
    pub(crate) fn revert(&self, task: &mut Task, previous: &Self) {
        restore(&mut task.name, self.name.as_ref(), previous.name.as_ref());
        restore(
            &mut task.description,
            self.description.as_ref(),
            previous.description.as_ref(),
        );
        restore(&mut task.status, self.status.as_ref(), previous.status.as_ref());
        restore(
            &mut task.assignee,
            self.assignee.as_ref(),
            previous.assignee.as_ref(),
        );
        restore(
            &mut task.due_date,
            self.due_date.as_ref(),
            previous.due_date.as_ref(),
        );
        restore(
            &mut task.priority,
            self.priority.as_ref(),
            previous.priority.as_ref(),
        );
        restore(
            &mut task.category,
            self.category.as_ref(),
            previous.category.as_ref(),
        );
        restore(
            &mut task.updated_at,
            self.updated_at.as_ref(),
            previous.updated_at.as_ref(),
        );
    }

    /// Moves this fallback patch's fields that `later` also wrote into
    /// `fallback`, the fallback patch of `later`.
    pub(crate) fn hand_down(&mut self, later: &Self, fallback: &mut Self) {
        hand_down(&mut self.name, later.name.as_ref(), &mut fallback.name);
        hand_down(&mut self.description, later.description.as_ref(), &mut fallback.description);
        hand_down(&mut self.status, later.status.as_ref(), &mut fallback.status);
        hand_down(&mut self.assignee, later.assignee.as_ref(), &mut fallback.assignee);
        hand_down(&mut self.due_date, later.due_date.as_ref(), &mut fallback.due_date);
        hand_down(&mut self.priority, later.priority.as_ref(), &mut fallback.priority);
        hand_down(&mut self.category, later.category.as_ref(), &mut fallback.category);
        hand_down(&mut self.updated_at, later.updated_at.as_ref(), &mut fallback.updated_at);
    }

    /// Drops this fallback patch's fields that `later` wrote.
    pub(crate) fn supersede(&mut self, later: &Self) {
        supersede(&mut self.name, later.name.as_ref());
        supersede(&mut self.description, later.description.as_ref());
        supersede(&mut self.status, later.status.as_ref());
        supersede(&mut self.assignee, later.assignee.as_ref());
        supersede(&mut self.due_date, later.due_date.as_ref());
        supersede(&mut self.priority, later.priority.as_ref());
        supersede(&mut self.category, later.category.as_ref());
        supersede(&mut self.updated_at, later.updated_at.as_ref());
    }

    /// Returns the partial store document for the set fields.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        if let Some(name) = &self.name {
            document.insert("name".to_owned(), Value::from(name.as_str()));
        }
        if let Some(description) = &self.description {
            document.insert("description".to_owned(), Value::from(description.as_str()));
        }
        if let Some(status) = self.status {
            write_status(&mut document, status);
        }
        if let Some(assignee) = &self.assignee {
            write_assignee(&mut document, assignee.as_ref());
        }
        if let Some(due_date) = self.due_date {
            write_due_date(&mut document, due_date);
        }
        if let Some(priority) = self.priority {
            document.insert("priority".to_owned(), Value::from(priority.as_str()));
        }
        if let Some(category) = self.category {
            document.insert("category".to_owned(), Value::from(category.as_str()));
        }
        if let Some(updated_at) = self.updated_at {
            write_timestamp(&mut document, "updatedAt", updated_at);
        }
        document
    }
}
