//! The board service and its generic optimistic update path.

use crate::board::{
    config::BoardConfig,
    error::{BoardError, BoardResult},
    observer::{BoardObserver, BoardSummary},
    state::{BoardState, TrackedRecord},
};
use crate::store::DocumentStore;
use crate::task::domain::Task;
use crate::task::query::{TaskFilter, compute_statistics, filter_tasks};
use crate::team::domain::TeamMember;
use crate::team::progress::compute_member_progress;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Owner of the shown board state and the single writer to it.
///
/// Clones share the same state, store and observers.
pub struct BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    pub(super) store: Arc<S>,
    pub(super) clock: Arc<C>,
    pub(super) config: Arc<BoardConfig>,
    state: Arc<RwLock<BoardState>>,
    observers: Vec<Arc<dyn BoardObserver>>,
}

impl<S, C> Clone for BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            config: Arc::clone(&self.config),
            state: Arc::clone(&self.state),
            observers: self.observers.clone(),
        }
    }
}

impl<S, C> BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty board and default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            config: Arc::new(BoardConfig::default()),
            state: Arc::default(),
            observers: Vec::new(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Registers an observer of state changes.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn BoardObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns today's date in the clock's local time zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Returns a copy of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.read_state().clone()
    }

    /// Returns a copy of the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read_state().tasks().to_vec()
    }

    /// Returns a copy of the members in display order.
    #[must_use]
    pub fn members(&self) -> Vec<TeamMember> {
        self.read_state().members().to_vec()
    }

    /// Returns the tasks passing `filter`.
    #[must_use]
    pub fn filtered_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        let today = self.today();
        let state = self.read_state();
        filter_tasks(state.tasks(), filter, today)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Computes statistics and member progress from the current state.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        let today = self.today();
        let state = self.read_state();
        BoardSummary {
            statistics: compute_statistics(state.tasks(), today),
            members: compute_member_progress(state.members(), state.tasks()),
        }
    }

    /// Applies `patch` in memory, notifies observers, then persists it.
    ///
    /// On a failed persist the patch is undone, observers are notified
    /// again, and the store error is returned. Fields a newer patch has
    /// written since keep the newer value, and fall back to this patch's
    /// starting value only if that newer write fails too.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] or a validation error
    /// before anything changes, or the store error after rollback.
    pub async fn apply_then_persist<R: TrackedRecord>(
        &self,
        id: &R::Id,
        patch: R::Patch,
    ) -> BoardResult<R> {
        let stamped = R::stamp(patch, self.clock.utc());
        let (ticket, updated) = {
            let mut state = self.write_state();
            let ticket = state.track::<R>(id, &stamped)?;
            let updated = state.find::<R>(id).cloned();
            (ticket, updated)
        };
        self.publish();
        tracing::debug!(kind = %R::KIND, id = %id, "applied optimistic change");

        let outcome = self.persist::<R>(id, &stamped).await;
        match (outcome, updated) {
            (Ok(()), Some(record)) => {
                self.write_state().settle::<R>(ticket);
                Ok(record)
            }
            (Ok(()), None) => {
                self.write_state().settle::<R>(ticket);
                Err(BoardError::NotFound {
                    kind: R::KIND,
                    id: R::document_id(id).clone(),
                })
            }
            (Err(err), _) => {
                tracing::warn!(
                    kind = %R::KIND,
                    id = %id,
                    error = %err,
                    "persist failed, rolling back optimistic change"
                );
                let found = self.write_state().roll_back::<R>(ticket);
                if !found {
                    tracing::debug!(kind = %R::KIND, id = %id, "record gone before rollback");
                }
                self.publish();
                Err(err)
            }
        }
    }

    /// Sends a patch to the store without touching the shown state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the store does not know the
    /// record, or [`BoardError::StoreUnavailable`] when it cannot be reached.
    pub async fn persist<R: TrackedRecord>(&self, id: &R::Id, patch: &R::Patch) -> BoardResult<()> {
        self.store
            .update(R::KIND, R::document_id(id), R::patch_document(patch))
            .await
            .map_err(BoardError::from)
    }

    /// Shows a new record, then creates it in the store.
    ///
    /// The record is removed again when the store rejects it.
    pub(super) async fn insert_then_create<R: TrackedRecord>(&self, record: R) -> BoardResult<R> {
        let key = record.key();
        let document = record.document();
        self.write_state().insert(record);
        self.publish();

        match self.store.create(R::KIND, document).await {
            Ok(id) => {
                tracing::debug!(kind = %R::KIND, id = %id, "created record");
                self.write_state()
                    .assign_id::<R>(key, id.clone())
                    .ok_or(BoardError::NotFound { kind: R::KIND, id })
            }
            Err(err) => {
                tracing::warn!(kind = %R::KIND, error = %err, "create failed, removing record");
                let removed = self.write_state().remove_by_key::<R>(key);
                if removed.is_some() {
                    self.publish();
                }
                Err(err.into())
            }
        }
    }

    /// Hides a record, then deletes it from the store.
    ///
    /// The record is put back at its former position when the store fails.
    pub(super) async fn remove_then_delete<R: TrackedRecord>(&self, id: &R::Id) -> BoardResult<()> {
        let (index, record) = {
            let mut state = self.write_state();
            let key = state
                .find::<R>(id)
                .map(R::key)
                .ok_or_else(|| BoardError::NotFound {
                    kind: R::KIND,
                    id: R::document_id(id).clone(),
                })?;
            state
                .remove_by_key::<R>(key)
                .ok_or_else(|| BoardError::NotFound {
                    kind: R::KIND,
                    id: R::document_id(id).clone(),
                })?
        };
        self.publish();

        if let Err(err) = self.store.delete(R::KIND, R::document_id(id)).await {
            tracing::warn!(kind = %R::KIND, id = %id, error = %err, "delete failed, restoring record");
            self.write_state().insert_at(index, record);
            self.publish();
            return Err(err.into());
        }
        tracing::debug!(kind = %R::KIND, id = %id, "deleted record");
        Ok(())
    }

    /// Replaces the whole board, as after a load.
    pub(super) fn replace_state(&self, state: BoardState) {
        *self.write_state() = state;
        self.publish();
    }

    /// Sends a fresh summary to every observer. Never holds the state lock
    /// while observers run.
    pub(super) fn publish(&self) {
        if self.observers.is_empty() {
            return;
        }
        let summary = self.summary();
        for observer in &self.observers {
            observer.board_changed(&summary);
        }
    }

    pub(super) fn read_state(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn write_state(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
