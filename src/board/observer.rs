//! Change notification for the UI layer.

use crate::task::query::TaskStatistics;
use crate::team::progress::MemberProgress;
use serde::Serialize;

/// Derived data recomputed after every in-memory change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    /// Task counters.
    pub statistics: TaskStatistics,
    /// Progress of every member, in member order.
    pub members: Vec<MemberProgress>,
}

/// Receives a fresh summary whenever the board's in-memory state changes,
/// including when an optimistic change is undone.
///
/// Called synchronously, before the corresponding store write is sent.
pub trait BoardObserver: Send + Sync {
    /// Handles a state change.
    fn board_changed(&self, summary: &BoardSummary);
}
