//! Port contract for the external document store.

use super::{Document, DocumentId, EntityKind, StoredDocument};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Document persistence contract.
///
/// Every operation is asynchronous and may fail independently. The board
/// assumes last-write-wins semantics for concurrent updates to the same
/// document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a record and returns its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be reached.
    async fn create(&self, kind: EntityKind, document: Document) -> StoreResult<DocumentId>;

    /// Merges `patch` into an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record does not exist or
    /// [`StoreError::Unavailable`] when the store cannot be reached.
    async fn update(&self, kind: EntityKind, id: &DocumentId, patch: Document) -> StoreResult<()>;

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record does not exist or
    /// [`StoreError::Unavailable`] when the store cannot be reached.
    async fn delete(&self, kind: EntityKind, id: &DocumentId) -> StoreResult<()>;

    /// Returns every record of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be reached.
    async fn list_all(&self, kind: EntityKind) -> StoreResult<Vec<StoredDocument>>;
}

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The record is unknown to the store.
    #[error("{kind} record not found: {id}")]
    NotFound {
        /// Record kind.
        kind: EntityKind,
        /// Requested identifier.
        id: DocumentId,
    },

    /// Transport or server failure.
    #[error("document store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a transport or server error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
