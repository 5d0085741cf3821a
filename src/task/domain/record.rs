//! Raw task documents and their migration into canonical tasks.

use super::{
    AssigneeRef, Category, PersistedTaskData, Priority, Task, TaskDomainError, TaskDraft, TaskId,
    TaskStatus,
};
use crate::store::{Document, read_timestamp};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task record exactly as found in the store.
///
/// Every field is optional because historical records come in several
/// shapes: boolean-only `completed` records without a `status`, free-form
/// status tokens, `project` identifiers instead of `category`, and
/// timestamps stored either as RFC 3339 strings or as `{seconds,
/// nanoseconds}` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDocument {
    /// Task name.
    pub name: Option<String>,
    /// Task description.
    pub description: Option<String>,
    /// Raw status token.
    pub status: Option<String>,
    /// Legacy completion flag.
    pub completed: Option<bool>,
    /// Assignee name.
    pub assignee: Option<String>,
    /// Due date, `YYYY-MM-DD` or a timestamp.
    pub due_date: Option<String>,
    /// Raw priority.
    pub priority: Option<String>,
    /// Raw category.
    pub category: Option<String>,
    /// Legacy project identifier, consulted when `category` is absent.
    pub project: Option<String>,
    /// Creation timestamp in any stored encoding.
    pub created_at: Option<Value>,
    /// Modification timestamp in any stored encoding.
    pub updated_at: Option<Value>,
}

impl TaskDocument {
    /// Reads a raw document.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when a field has the wrong JSON
    /// type, for example a numeric `name`.
    pub fn from_document(document: &Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(document.clone()))
    }

    /// Returns the canonical status of this record.
    #[must_use]
    pub fn normalized_status(&self) -> TaskStatus {
        TaskStatus::normalize(self.status.as_deref(), self.completed)
    }

    /// Returns the canonical category of this record.
    #[must_use]
    pub fn normalized_category(&self) -> Category {
        Category::normalize(self.category.as_deref().or(self.project.as_deref()))
    }

    /// Returns `true` when the stored shape differs from the canonical one
    /// in status, completion mirror, category, or priority.
    #[must_use]
    pub fn needs_migration(&self) -> bool {
        let status = self.normalized_status();
        let category = self.normalized_category();
        self.status.as_deref() != Some(status.as_str())
            || self.completed != Some(status.is_completed())
            || self.category.as_deref() != Some(category.as_str())
            || !self.priority.as_deref().is_some_and(is_canonical_priority)
    }

    /// Returns the partial document that brings the record into canonical
    /// shape.
    #[must_use]
    pub fn migration_patch(&self, default_priority: Priority) -> Document {
        let status = self.normalized_status();
        let mut document = Document::new();
        document.insert("status".to_owned(), Value::from(status.as_str()));
        document.insert("completed".to_owned(), Value::from(status.is_completed()));
        document.insert(
            "category".to_owned(),
            Value::from(self.normalized_category().as_str()),
        );
        document.insert(
            "priority".to_owned(),
            Value::from(self.normalized_priority(default_priority).as_str()),
        );
        document
    }

    fn normalized_priority(&self, default_priority: Priority) -> Priority {
        Priority::normalize(self.priority.as_deref(), default_priority)
    }

    /// Converts the record into a canonical task.
    ///
    /// Unreadable due dates are dropped and unreadable timestamps replaced
    /// by `fallback_time`. Name and description are not validated: stored
    /// records are accepted as they are.
    #[must_use]
    pub fn into_task(
        self,
        id: Option<TaskId>,
        default_priority: Priority,
        fallback_time: DateTime<Utc>,
    ) -> Task {
        let status = self.normalized_status();
        let category = self.normalized_category();
        let priority = self.normalized_priority(default_priority);
        let due_date = self
            .due_date
            .as_deref()
            .and_then(|raw| parse_due_date(raw).ok().flatten());
        let created_at = self
            .created_at
            .as_ref()
            .and_then(read_timestamp)
            .unwrap_or(fallback_time);
        let updated_at = self
            .updated_at
            .as_ref()
            .and_then(read_timestamp)
            .unwrap_or(created_at);

        Task::from_persisted(PersistedTaskData {
            id,
            content: TaskDraft {
                name: self.name.unwrap_or_default().trim().to_owned(),
                description: self.description.unwrap_or_default().trim().to_owned(),
                status,
                assignee: self.assignee.and_then(AssigneeRef::new),
                due_date,
                priority,
                category,
            },
            created_at,
            updated_at,
        })
    }
}

/// Parses a due date from form or store input.
///
/// Blank input means "no due date". Timestamps are truncated to their
/// calendar day in the local time zone, the zone "today" is read in.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] for anything else.
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| Some(timestamp.with_timezone(&Local).date_naive()))
        .map_err(|_| TaskDomainError::InvalidDueDate(raw.to_owned()))
}

fn is_canonical_priority(raw: &str) -> bool {
    Priority::try_from(raw).is_ok_and(|priority| priority.as_str() == raw)
}
