//! Task lifecycle and derived task views.
//!
//! The canonical status model, legacy record migration, and the pure query
//! functions the UI uses to slice and summarize the task set:
//!
//! - Domain types in [`domain`]
//! - Filters and statistics in [`query`]
//!
//! Mutations go through [`crate::board`]; nothing in this module writes
//! to shared state.

pub mod domain;
pub mod query;

#[cfg(test)]
mod tests;
