//! In-memory integration tests for optimistic task edits.

use super::helpers::{Board, board, stored_field};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;
use taskboard::board::BoardError;
use taskboard::store::EntityKind;
use taskboard::task::domain::{Category, Priority, TaskDraft, TaskPatch, TaskStatus};
use taskboard::task::query::{CategoryFilter, TabFilter, TaskFilter};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_persisted_in_canonical_shape(board: Board) -> eyre::Result<()> {
    let draft = TaskDraft::new("Build login form")
        .with_assignee("Ana")
        .with_priority(Priority::High)
        .with_category(Category::Frontend)
        .with_due_date(NaiveDate::from_ymd_opt(2030, 1, 15).ok_or_else(|| eyre::eyre!("date"))?);

    let created = board.service.create_task(draft).await?;

    let id = created
        .id()
        .ok_or_else(|| eyre::eyre!("created task has no id"))?
        .as_document_id();
    let status = stored_field(&board.store, EntityKind::Task, id, "status");
    eyre::ensure!(status == Some(json!("TODO")), "unexpected status {status:?}");
    let completed = stored_field(&board.store, EntityKind::Task, id, "completed");
    eyre::ensure!(completed == Some(json!(false)));
    let due = stored_field(&board.store, EntityKind::Task, id, "dueDate");
    eyre::ensure!(due == Some(json!("2030-01-15")));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_toggle_reverts_when_the_store_goes_offline(board: Board) -> eyre::Result<()> {
    let created = board
        .service
        .create_task(TaskDraft::new("Ship release"))
        .await?;
    let id = created
        .id()
        .cloned()
        .ok_or_else(|| eyre::eyre!("created task has no id"))?;
    board.store.set_available(false);

    let result = board.service.set_task_completed(&id, true).await;

    eyre::ensure!(matches!(result, Err(BoardError::StoreUnavailable(_))));
    let summary = board.service.summary();
    eyre::ensure!(summary.statistics.completed == 0);
    eyre::ensure!(summary.statistics.percentage == 0);
    board.store.set_available(true);
    let stored = stored_field(&board.store, EntityKind::Task, id.as_document_id(), "status");
    eyre::ensure!(stored == Some(json!("TODO")));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advancing_walks_the_whole_lifecycle(board: Board) -> eyre::Result<()> {
    let created = board.service.create_task(TaskDraft::new("Cycle")).await?;
    let id = created
        .id()
        .cloned()
        .ok_or_else(|| eyre::eyre!("created task has no id"))?;

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(board.service.advance_task_status(&id).await?.status());
    }

    eyre::ensure!(
        seen == vec![
            TaskStatus::InProgress,
            TaskStatus::ForDeployment,
            TaskStatus::Deployed,
            TaskStatus::Todo,
        ],
        "unexpected cycle {seen:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_puts_the_task_back_in_place(board: Board) -> eyre::Result<()> {
    for name in ["First", "Second", "Third"] {
        board.service.create_task(TaskDraft::new(name)).await?;
    }
    let tasks = board.service.tasks();
    let middle = tasks
        .get(1)
        .and_then(|task| task.id().cloned())
        .ok_or_else(|| eyre::eyre!("missing middle task"))?;
    board.store.set_available(false);

    let result = board.service.delete_task(&middle).await;

    eyre::ensure!(result.is_err());
    let names: Vec<String> = board
        .service
        .tasks()
        .iter()
        .map(|task| task.name().to_owned())
        .collect();
    eyre::ensure!(names == vec!["First", "Second", "Third"], "order {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_name_and_description_is_rejected(board: Board) -> eyre::Result<()> {
    let created = board.service.create_task(TaskDraft::new("Keep me")).await?;
    let id = created
        .id()
        .cloned()
        .ok_or_else(|| eyre::eyre!("created task has no id"))?;
    let before = board.observer.count();

    let result = board
        .service
        .patch_task(&id, TaskPatch::new().with_name("  ").with_description(""))
        .await;

    eyre::ensure!(result.as_ref().is_err_and(BoardError::is_validation));
    eyre::ensure!(board.observer.count() == before, "validation must not publish");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_view_combines_all_three_selectors(board: Board) -> eyre::Result<()> {
    let drafts = [
        TaskDraft::new("A").with_assignee("Ana").with_category(Category::Frontend),
        TaskDraft::new("B").with_assignee("Ana").with_category(Category::Backend),
        TaskDraft::new("C")
            .with_assignee("Ben")
            .with_category(Category::Backend),
        TaskDraft::new("D")
            .with_assignee("Ana")
            .with_category(Category::Backend)
            .with_status(TaskStatus::Deployed),
    ];
    for draft in drafts {
        board.service.create_task(draft).await?;
    }

    let filter = TaskFilter::all()
        .with_tab(TabFilter::Pending)
        .with_member("Ana".parse()?)
        .with_category(CategoryFilter::Only(Category::Backend));
    let names: Vec<String> = board
        .service
        .filtered_tasks(&filter)
        .iter()
        .map(|task| task.name().to_owned())
        .collect();

    eyre::ensure!(names == vec!["B"], "unexpected selection {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quick_add_without_category_filter_uses_the_configured_default(
    board: Board,
) -> eyre::Result<()> {
    let task = board
        .service
        .quick_add_task("Refactor: split module", CategoryFilter::All)
        .await?;

    eyre::ensure!(task.name() == "Refactor");
    eyre::ensure!(task.description() == "split module");
    eyre::ensure!(task.category() == Category::Frontend);
    eyre::ensure!(task.priority() == Priority::Medium);
    Ok(())
}
