//! Adapter implementations of the document store port.

pub mod memory;

pub use memory::InMemoryDocumentStore;
