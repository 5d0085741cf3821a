//! Document store boundary for task board persistence.
//!
//! The board treats its backing store as a schemaless document database that
//! can create, patch, delete, and list records of a given kind. Nothing beyond
//! "fetch all records of a kind" and "apply a partial update by id" is
//! assumed:
//!
//! - Shared identifiers and document types in [`domain`]
//! - The store contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{Document, DocumentId, EntityKind, LocalKey, StoredDocument, read_timestamp};
pub use ports::{DocumentStore, StoreError, StoreResult};
