//! Read-only views derived from a task collection.
//!
//! Everything here is a pure function of its inputs: callers pass the task
//! slice and the current calendar day, and receive plain data back.

mod filter;
mod statistics;

pub use filter::{
    CategoryFilter, MemberFilter, MemberTabIndicators, ParseFilterError, TabFilter, TaskFilter,
    filter_documents, filter_tasks, member_tab_indicators,
};
pub use statistics::{TaskStatistics, compute_statistics, rounded_percentage};
