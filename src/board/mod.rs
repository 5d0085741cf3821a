//! Optimistic coordination of task and member edits.
//!
//! [`services::BoardService`] owns the in-memory [`state::BoardState`] and is
//! the only path that writes to it. Every edit is applied in memory first,
//! observers are told about the new derived summary, and only then is the
//! change sent to the [`crate::store::DocumentStore`]. A failed write is
//! undone in memory and reported to the caller.
//!
//! - Configuration in [`config`]
//! - Service errors in [`error`]
//! - Change notification in [`observer`]
//! - The shared collections and the apply step in [`state`]
//! - Orchestration in [`services`]

pub mod config;
pub mod error;
pub mod observer;
pub mod services;
pub mod state;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use observer::{BoardObserver, BoardSummary};
pub use services::{BoardService, LoadReport, ProgressSyncReport, UpdateMemberRequest};
pub use state::{BoardState, TrackedRecord};

#[cfg(test)]
mod tests;
