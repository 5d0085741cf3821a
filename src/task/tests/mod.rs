//! Unit tests for the task domain and task queries.

mod statistics_tests;

use crate::task::domain::{PersistedTaskData, Task, TaskDraft, TaskId};
use chrono::{DateTime, NaiveDate, Utc};

/// Builds a persisted task with a fixed timestamp.
fn persisted(id: &str, draft: TaskDraft) -> Task {
    let at = DateTime::<Utc>::UNIX_EPOCH;
    Task::from_persisted(PersistedTaskData {
        id: Some(TaskId::new(id)),
        content: draft,
        created_at: at,
        updated_at: at,
    })
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
