//! Taskboard: task lifecycle and derived team state.
//!
//! This crate keeps a small team's task board consistent: it normalizes
//! legacy task records, filters and summarizes tasks, derives per-member
//! progress, and applies edits optimistically against a document store,
//! rolling them back when the store rejects them.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types and normalization rules
//! - **Ports**: Abstract trait interfaces for the document store
//! - **Adapters**: Concrete store implementations
//! - **Services**: Orchestration of optimistic edits
//!
//! # Modules
//!
//! - [`store`]: Document store port and the in-memory adapter
//! - [`task`]: Task model, status normalization, filters and statistics
//! - [`team`]: Team members and progress aggregation
//! - [`board`]: Optimistic mutation coordinator

pub mod board;
mod field;
pub mod store;
pub mod task;
pub mod team;
