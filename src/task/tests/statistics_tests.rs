//! Unit tests for the statistics aggregator.

use crate::task::domain::{Priority, Task, TaskDraft, TaskStatus};
use crate::task::query::{TaskStatistics, compute_statistics, rounded_percentage};
use crate::task::tests::{date, persisted};
use rstest::{fixture, rstest};

#[fixture]
fn board() -> Vec<Task> {
    vec![
        persisted(
            "t-1",
            TaskDraft::new("Deployed")
                .with_status(TaskStatus::Deployed)
                .with_assignee("Ana"),
        ),
        persisted(
            "t-2",
            TaskDraft::new("Waiting")
                .with_status(TaskStatus::ForDeployment)
                .with_priority(Priority::High)
                .with_due_date(date(2024, 6, 1)),
        ),
        persisted(
            "t-3",
            TaskDraft::new("Late but shipped")
                .with_status(TaskStatus::Deployed)
                .with_due_date(date(2024, 5, 1))
                .with_assignee("Ben"),
        ),
        persisted(
            "t-4",
            TaskDraft::new("Fresh")
                .with_priority(Priority::High)
                .with_assignee(""),
        ),
        persisted(
            "t-5",
            TaskDraft::new("Started")
                .with_status(TaskStatus::InProgress)
                .with_assignee("Ana"),
        ),
    ]
}

#[rstest]
fn counts_every_summary_field(board: Vec<Task>) {
    let stats = compute_statistics(&board, date(2024, 6, 10));

    assert_eq!(
        stats,
        TaskStatistics {
            total: 5,
            completed: 2,
            percentage: 40,
            high_priority: 2,
            overdue: 1,
            unassigned: 2,
            for_deployment: 1,
        }
    );
}

#[test]
fn empty_collection_has_zero_percentage() {
    let stats = compute_statistics(&[], date(2024, 6, 10));
    assert_eq!(stats.percentage, 0);
    assert_eq!(stats.total, 0);
}

#[rstest]
#[case(0, 0, 0)]
#[case(1, 3, 33)]
#[case(2, 3, 67)]
#[case(1, 2, 50)]
#[case(1, 8, 13)]
#[case(3, 3, 100)]
#[case(5, 3, 100)]
fn percentages_round_half_up(#[case] part: usize, #[case] whole: usize, #[case] expected: u8) {
    assert_eq!(rounded_percentage(part, whole), expected);
}
