//! Summary counters over a task collection.

use crate::task::domain::{Priority, Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Dashboard summary of a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total: usize,
    /// Number of deployed tasks.
    pub completed: usize,
    /// Share of deployed tasks, rounded to a whole percent.
    pub percentage: u8,
    /// Number of high-priority tasks.
    pub high_priority: usize,
    /// Number of overdue tasks.
    pub overdue: usize,
    /// Number of tasks without an assignee.
    pub unassigned: usize,
    /// Number of tasks waiting for deployment.
    pub for_deployment: usize,
}

/// Computes the summary counters from scratch.
#[must_use]
pub fn compute_statistics(tasks: &[Task], today: NaiveDate) -> TaskStatistics {
    let mut stats = tasks
        .iter()
        .fold(TaskStatistics::default(), |mut stats, task| {
            stats.total += 1;
            stats.completed += usize::from(task.completed());
            stats.high_priority += usize::from(task.priority() == Priority::High);
            stats.overdue += usize::from(task.is_overdue(today));
            stats.unassigned += usize::from(task.assignee().is_none());
            stats.for_deployment += usize::from(task.status() == TaskStatus::ForDeployment);
            stats
        });
    stats.percentage = rounded_percentage(stats.completed, stats.total);
    stats
}

/// Returns `part / whole` as a percentage rounded half up, or `0` when
/// `whole` is zero. `part` is capped at `whole`.
#[must_use]
pub fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let capped = part.min(whole);
    let doubled = capped.saturating_mul(200).saturating_add(whole);
    let percent = doubled.checked_div(whole.saturating_mul(2)).unwrap_or(0);
    u8::try_from(percent).unwrap_or(100)
}
