//! Domain model for the task lifecycle.
//!
//! Tasks carry a single source of truth for their lifecycle position,
//! [`TaskStatus`]; the legacy `completed` flag is a read-only projection of
//! it. Historical encodings of status and category are absorbed by
//! [`TaskDocument`] when raw store records become [`Task`] values.

mod assignee;
mod category;
mod error;
mod ids;
mod patch;
mod priority;
mod record;
mod status;
mod task;

pub use assignee::AssigneeRef;
pub use category::Category;
pub use error::{ParseTaskFieldError, TaskDomainError};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use priority::Priority;
pub use record::{TaskDocument, parse_due_date};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDraft};
