//! In-memory document store for tests and local tooling.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::store::{
    domain::{Document, DocumentId, EntityKind, StoredDocument},
    ports::{DocumentStore, StoreError, StoreResult},
};

/// Thread-safe in-memory document store.
///
/// Records are kept in insertion order per kind. The store can be switched
/// offline with [`InMemoryDocumentStore::set_available`] to simulate outages.
#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<InMemoryStoreState>>,
    available: Arc<AtomicBool>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    collections: HashMap<EntityKind, Vec<StoredDocument>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self {
            state: Arc::default(),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl InMemoryDocumentStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the store on or off. While off, every operation fails with
    /// [`StoreError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Inserts a raw document directly, bypassing availability checks.
    ///
    /// Useful for seeding legacy-shaped records.
    pub fn seed(&self, kind: EntityKind, document: Document) -> DocumentId {
        let id = next_id();
        let mut state = write_state(&self.state);
        state
            .collections
            .entry(kind)
            .or_default()
            .push(StoredDocument::new(id.clone(), document));
        id
    }

    /// Returns a copy of a stored document, if present.
    #[must_use]
    pub fn document(&self, kind: EntityKind, id: &DocumentId) -> Option<Document> {
        let state = read_state(&self.state);
        state
            .collections
            .get(&kind)
            .and_then(|docs| docs.iter().find(|stored| stored.id == *id))
            .map(|stored| stored.document.clone())
    }

    /// Returns the number of stored documents of a kind.
    #[must_use]
    pub fn len(&self, kind: EntityKind) -> usize {
        read_state(&self.state)
            .collections
            .get(&kind)
            .map_or(0, Vec::len)
    }

    /// Returns `true` when no documents of the kind are stored.
    #[must_use]
    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::unavailable(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "in-memory store switched off",
            )))
        }
    }
}

fn next_id() -> DocumentId {
    DocumentId::new(Uuid::new_v4().simple().to_string())
}

fn read_state(
    state: &RwLock<InMemoryStoreState>,
) -> std::sync::RwLockReadGuard<'_, InMemoryStoreState> {
    state
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write_state(
    state: &RwLock<InMemoryStoreState>,
) -> std::sync::RwLockWriteGuard<'_, InMemoryStoreState> {
    state
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn not_found(kind: EntityKind, id: &DocumentId) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.clone(),
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, kind: EntityKind, document: Document) -> StoreResult<DocumentId> {
        self.ensure_available()?;
        Ok(self.seed(kind, document))
    }

    async fn update(&self, kind: EntityKind, id: &DocumentId, patch: Document) -> StoreResult<()> {
        self.ensure_available()?;
        let mut state = write_state(&self.state);
        let stored = state
            .collections
            .get_mut(&kind)
            .and_then(|docs| docs.iter_mut().find(|stored| stored.id == *id))
            .ok_or_else(|| not_found(kind, id))?;

        for (key, value) in patch {
            stored.document.insert(key, value);
        }
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: &DocumentId) -> StoreResult<()> {
        self.ensure_available()?;
        let mut state = write_state(&self.state);
        let docs = state
            .collections
            .get_mut(&kind)
            .ok_or_else(|| not_found(kind, id))?;
        let position = docs
            .iter()
            .position(|stored| stored.id == *id)
            .ok_or_else(|| not_found(kind, id))?;
        docs.remove(position);
        Ok(())
    }

    async fn list_all(&self, kind: EntityKind) -> StoreResult<Vec<StoredDocument>> {
        self.ensure_available()?;
        let state = read_state(&self.state);
        Ok(state.collections.get(&kind).cloned().unwrap_or_default())
    }
}
