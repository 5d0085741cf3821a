//! Shared world state for optimistic board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{BoardResult, BoardService};
use taskboard::store::adapters::InMemoryDocumentStore;
use taskboard::task::domain::Task;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryDocumentStore, DefaultClock>;

/// Scenario world for optimistic edit behaviour tests.
pub struct BoardWorld {
    pub store: InMemoryDocumentStore,
    pub service: TestBoardService,
    pub last_task: Option<Task>,
    pub last_edit: Option<BoardResult<Task>>,
    pub last_delete: Option<BoardResult<()>>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryDocumentStore::new();
        let service = BoardService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
        Self {
            store,
            service,
            last_task: None,
            last_edit: None,
            last_delete: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
