//! Task aggregate and its editable content.

use super::{AssigneeRef, Category, Priority, TaskDomainError, TaskId, TaskStatus};
use crate::store::{Document, LocalKey};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde_json::Value;

/// User-editable content of a task.
///
/// Used both to create tasks and as the whole-record form of an edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    /// Short title.
    pub name: String,
    /// Longer free text.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Member the task is assigned to, by name.
    pub assignee: Option<AssigneeRef>,
    /// Day the task is due.
    pub due_date: Option<NaiveDate>,
    /// Urgency.
    pub priority: Priority,
    /// Area of the codebase.
    pub category: Category,
}

impl TaskDraft {
    /// Creates a draft with a name and default values elsewhere.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Assigns the task by member name. A blank name leaves it unassigned.
    #[must_use]
    pub fn with_assignee(mut self, name: impl Into<String>) -> Self {
        self.assignee = AssigneeRef::new(name);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Reads one line of quick-add input.
    ///
    /// `"Name: details"` splits at the first colon into name and
    /// description. Input without a colon, or whose very first character is
    /// one, becomes the name. The colon is looked up before trimming, so
    /// `"  : details"` yields a description without a name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTask`] when neither part has text.
    pub fn from_quick_add(input: &str) -> Result<Self, TaskDomainError> {
        let draft = match input.split_once(':') {
            Some((name, description)) if !name.is_empty() => {
                Self::new(name).with_description(description)
            }
            _ => Self::new(input),
        };
        draft.validated()
    }

    /// Trims text fields and checks that the task has a name or description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTask`] when both are blank.
    pub fn validated(mut self) -> Result<Self, TaskDomainError> {
        self.name = self.name.trim().to_owned();
        self.description = self.description.trim().to_owned();
        ensure_has_text(&self.name, &self.description)?;
        Ok(self)
    }
}

pub(super) fn ensure_has_text(name: &str, description: &str) -> Result<(), TaskDomainError> {
    if name.trim().is_empty() && description.trim().is_empty() {
        return Err(TaskDomainError::EmptyTask);
    }
    Ok(())
}

/// Task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub(super) id: Option<TaskId>,
    pub(super) key: LocalKey,
    pub(super) name: String,
    pub(super) description: String,
    pub(super) status: TaskStatus,
    pub(super) assignee: Option<AssigneeRef>,
    pub(super) due_date: Option<NaiveDate>,
    pub(super) priority: Priority,
    pub(super) category: Category,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store identifier, if the task has been persisted.
    pub id: Option<TaskId>,
    /// Task content.
    pub content: TaskDraft,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet persisted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTask`] when the draft has neither a
    /// name nor a description.
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let content = draft.validated()?;
        let timestamp = clock.utc();
        Ok(Self::from_persisted(PersistedTaskData {
            id: None,
            content,
            created_at: timestamp,
            updated_at: timestamp,
        }))
    }

    /// Reconstructs a task from stored data without validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            content,
            created_at,
            updated_at,
        } = data;
        Self {
            id,
            key: LocalKey::new(),
            name: content.name,
            description: content.description,
            status: content.status,
            assignee: content.assignee,
            due_date: content.due_date,
            priority: content.priority,
            category: content.category,
            created_at,
            updated_at,
        }
    }

    /// Returns the store identifier, or `None` before persistence.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    /// Returns the in-memory identity of the task.
    #[must_use]
    pub const fn local_key(&self) -> LocalKey {
        self.key
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the name, or the description for tasks without a name.
    #[must_use]
    pub fn title(&self) -> &str {
        if self.name.is_empty() {
            &self.description
        } else {
            &self.name
        }
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the task is deployed.
    ///
    /// Derived from [`Task::status`]; there is no way to set it directly.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Returns the assignee reference.
    #[must_use]
    pub const fn assignee(&self) -> Option<&AssigneeRef> {
        self.assignee.as_ref()
    }

    /// Returns `true` when the task references the given member name.
    #[must_use]
    pub fn is_assigned_to(&self, member_name: &str) -> bool {
        self.assignee
            .as_ref()
            .is_some_and(|assignee| assignee.refers_to(member_name))
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the due date lies strictly before `today` and the
    /// task is not deployed.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date
            .is_some_and(|due| due < today && !self.status.is_completed())
    }

    /// Returns the editable content of the task.
    #[must_use]
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            assignee: self.assignee.clone(),
            due_date: self.due_date,
            priority: self.priority,
            category: self.category,
        }
    }

    /// Returns the full store document for this task.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        document.insert("name".to_owned(), Value::from(self.name.as_str()));
        document.insert(
            "description".to_owned(),
            Value::from(self.description.as_str()),
        );
        write_status(&mut document, self.status);
        write_assignee(&mut document, self.assignee.as_ref());
        write_due_date(&mut document, self.due_date);
        document.insert("priority".to_owned(), Value::from(self.priority.as_str()));
        document.insert("category".to_owned(), Value::from(self.category.as_str()));
        write_timestamp(&mut document, "createdAt", self.created_at);
        write_timestamp(&mut document, "updatedAt", self.updated_at);
        document
    }

    pub(crate) fn assign_id(&mut self, id: TaskId) {
        self.id = Some(id);
    }
}

/// Writes the status together with its legacy `completed` mirror.
pub(super) fn write_status(document: &mut Document, status: TaskStatus) {
    document.insert("status".to_owned(), Value::from(status.as_str()));
    document.insert("completed".to_owned(), Value::from(status.is_completed()));
}

pub(super) fn write_assignee(document: &mut Document, assignee: Option<&AssigneeRef>) {
    let name = assignee.map_or("", AssigneeRef::as_str);
    document.insert("assignee".to_owned(), Value::from(name));
}

pub(super) fn write_due_date(document: &mut Document, due_date: Option<NaiveDate>) {
    let formatted = due_date.map(|date| date.format("%Y-%m-%d").to_string());
    document.insert(
        "dueDate".to_owned(),
        Value::from(formatted.unwrap_or_default()),
    );
}

pub(super) fn write_timestamp(document: &mut Document, key: &str, at: DateTime<Utc>) {
    document.insert(key.to_owned(), Value::from(at.to_rfc3339()));
}
