//! Unit tests for the board coordinator.


use crate::board::{BoardObserver, BoardSummary};
use crate::store::{
    Document, DocumentId, DocumentStore, EntityKind, StoreError, StoreResult, StoredDocument,
};
use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};

mock! {
    pub Store {}

    #[async_trait]
    impl DocumentStore for Store {
        async fn create(&self, kind: EntityKind, document: Document) -> StoreResult<DocumentId>;
        async fn update(&self, kind: EntityKind, id: &DocumentId, patch: Document) -> StoreResult<()>;
        async fn delete(&self, kind: EntityKind, id: &DocumentId) -> StoreResult<()>;
        async fn list_all(&self, kind: EntityKind) -> StoreResult<Vec<StoredDocument>>;
    }
}

/// Observer that keeps every summary it receives.
#[derive(Default)]
pub(super) struct RecordingObserver {
    summaries: Mutex<Vec<BoardSummary>>,
}

impl RecordingObserver {
    pub(super) fn count(&self) -> usize {
        self.lock().len()
    }

    pub(super) fn last(&self) -> Option<BoardSummary> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<BoardSummary>> {
        self.summaries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardObserver for RecordingObserver {
    fn board_changed(&self, summary: &BoardSummary) {
        self.lock().push(summary.clone());
    }
}

fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

fn stored(id: &str, value: Value) -> StoredDocument {
    StoredDocument::new(DocumentId::new(id), document(value))
}

fn offline() -> StoreError {
    StoreError::unavailable(std::io::Error::other("store offline"))
}
