//! Team members and their derived progress.
//!
//! Members are joined to tasks by display name. Their `progress` and
//! `status` are never edited directly; [`progress`] derives both from the
//! task collection and the board persists the results.
//!
//! - Domain types in [`domain`]
//! - The progress aggregator in [`progress`]

pub mod domain;
pub mod progress;

#[cfg(test)]
mod tests;
