//! Task operations of the board service.

use super::BoardService;
use crate::board::error::{BoardError, BoardResult};
use crate::store::{DocumentStore, EntityKind};
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
use crate::task::query::CategoryFilter;
use mockable::Clock;

impl<S, C> BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Creates a task, showing it before the store confirms.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a draft without text, or the store
    /// error after the task has been removed again.
    pub async fn create_task(&self, draft: TaskDraft) -> BoardResult<Task> {
        let task = Task::new(draft, &*self.clock)?;
        let assigned = task.assignee().is_some();
        let created = self.insert_then_create(task).await?;
        tracing::info!(task = %created.title(), "task created");
        if assigned {
            self.sync_member_progress().await;
        }
        Ok(created)
    }

    /// Creates a task from one line of quick-add input.
    ///
    /// The task lands in the category of the active filter, or the
    /// configured quick-add category when all categories are shown.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank input, or the store error after
    /// rollback.
    pub async fn quick_add_task(&self, input: &str, active: CategoryFilter) -> BoardResult<Task> {
        let category = match active {
            CategoryFilter::Only(category) => category,
            CategoryFilter::All => self.config.quick_add_category,
        };
        let draft = TaskDraft::from_quick_add(input)?
            .with_category(category)
            .with_priority(self.config.default_priority);
        self.create_task(draft).await
    }

    /// Replaces every editable field of a task.
    ///
    /// # Errors
    ///
    /// See [`BoardService::patch_task`].
    pub async fn update_task(&self, id: &TaskId, draft: TaskDraft) -> BoardResult<Task> {
        let content = draft.validated()?;
        self.patch_task(id, TaskPatch::from_draft(content)).await
    }

    /// Applies a partial change to a task.
    ///
    /// Member progress is recomputed and persisted when the change touches
    /// the assignee or status and the task write succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] or a validation error before any
    /// change, or the store error after rollback.
    pub async fn patch_task(&self, id: &TaskId, patch: TaskPatch) -> BoardResult<Task> {
        let affects_progress = patch.affects_progress();
        let task = self.apply_then_persist::<Task>(id, patch).await?;
        if affects_progress {
            self.sync_member_progress().await;
        }
        Ok(task)
    }

    /// Moves a task to the given status.
    ///
    /// # Errors
    ///
    /// See [`BoardService::patch_task`].
    pub async fn set_task_status(&self, id: &TaskId, status: TaskStatus) -> BoardResult<Task> {
        self.patch_task(id, TaskPatch::new().with_status(status))
            .await
    }

    /// Moves a task one step along its lifecycle, wrapping from deployed
    /// back to to-do.
    ///
    /// # Errors
    ///
    /// See [`BoardService::patch_task`].
    pub async fn advance_task_status(&self, id: &TaskId) -> BoardResult<Task> {
        let current = self
            .read_state()
            .find::<Task>(id)
            .map(Task::status)
            .ok_or_else(|| not_found(id))?;
        self.set_task_status(id, current.advance()).await
    }

    /// Ticks or unticks the completion box.
    ///
    /// Ticking deploys the task, unticking returns it to to-do.
    ///
    /// # Errors
    ///
    /// See [`BoardService::patch_task`].
    pub async fn set_task_completed(&self, id: &TaskId, completed: bool) -> BoardResult<Task> {
        let status = if completed {
            TaskStatus::Deployed
        } else {
            TaskStatus::Todo
        };
        self.set_task_status(id, status).await
    }

    /// Deletes a task, hiding it before the store confirms.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown task, or the store
    /// error after the task has been put back.
    pub async fn delete_task(&self, id: &TaskId) -> BoardResult<()> {
        let assigned = self
            .read_state()
            .find::<Task>(id)
            .map(|task| task.assignee().is_some())
            .ok_or_else(|| not_found(id))?;
        self.remove_then_delete::<Task>(id).await?;
        tracing::info!(task = %id, "task deleted");
        if assigned {
            self.sync_member_progress().await;
        }
        Ok(())
    }
}

fn not_found(id: &TaskId) -> BoardError {
    BoardError::NotFound {
        kind: EntityKind::Task,
        id: id.as_document_id().clone(),
    }
}
