//! Shared fixtures for board integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};
use taskboard::board::{BoardObserver, BoardService, BoardSummary};
use taskboard::store::{Document, EntityKind, adapters::InMemoryDocumentStore};

/// Service type used by the integration tests.
pub type TestService = BoardService<InMemoryDocumentStore, DefaultClock>;

/// Observer that keeps every summary it receives.
#[derive(Default)]
pub struct RecordingObserver {
    summaries: Mutex<Vec<BoardSummary>>,
}

impl RecordingObserver {
    /// Number of summaries received so far.
    pub fn count(&self) -> usize {
        self.summaries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Latest summary, if any.
    pub fn last(&self) -> Option<BoardSummary> {
        self.summaries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl BoardObserver for RecordingObserver {
    fn board_changed(&self, summary: &BoardSummary) {
        self.summaries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(summary.clone());
    }
}

/// A service wired to an in-memory store and a recording observer.
pub struct Board {
    pub store: InMemoryDocumentStore,
    pub service: TestService,
    pub observer: Arc<RecordingObserver>,
}

/// Provides an empty board backed by a fresh in-memory store.
#[fixture]
pub fn board() -> Board {
    board_with(InMemoryDocumentStore::new())
}

/// Builds a board over an existing, possibly seeded store.
pub fn board_with(store: InMemoryDocumentStore) -> Board {
    let observer = Arc::new(RecordingObserver::default());
    let service = BoardService::new(Arc::new(store.clone()), Arc::new(DefaultClock))
        .with_observer(Arc::clone(&observer) as Arc<dyn BoardObserver>);
    Board {
        store,
        service,
        observer,
    }
}

/// Converts a JSON object literal into a store document.
///
/// # Panics
///
/// Panics when `value` is not an object.
pub fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Reads one field of a stored document.
pub fn stored_field(
    store: &InMemoryDocumentStore,
    kind: EntityKind,
    id: &taskboard::store::DocumentId,
    field: &str,
) -> Option<Value> {
    store
        .document(kind, id)
        .and_then(|stored| stored.get(field).cloned())
}
