//! In-memory integration tests for loading and migrating stored records.

use super::helpers::{board_with, document, stored_field};
use rstest::rstest;
use serde_json::json;
use taskboard::store::{EntityKind, adapters::InMemoryDocumentStore};
use taskboard::task::domain::{Category, TaskStatus};
use taskboard::team::domain::MemberStatus;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn legacy_records_are_normalized_and_written_back() -> eyre::Result<()> {
    let store = InMemoryDocumentStore::new();
    let legacy = store.seed(
        EntityKind::Task,
        document(json!({"name": "Old", "completed": true, "category": "r3"})),
    );
    let pending = store.seed(
        EntityKind::Task,
        document(json!({"name": "Older", "status": "pending", "project": "other"})),
    );
    let board = board_with(store);

    let report = board.service.load().await;

    eyre::ensure!(report.tasks == 2 && report.migrated == 2);
    let tasks = board.service.tasks();
    let statuses: Vec<(TaskStatus, Category)> = tasks
        .iter()
        .map(|task| (task.status(), task.category()))
        .collect();
    eyre::ensure!(
        statuses
            == vec![
                (TaskStatus::Deployed, Category::Frontend),
                (TaskStatus::Todo, Category::Backend),
            ],
        "unexpected normalization {statuses:?}"
    );
    let written = stored_field(&board.store, EntityKind::Task, &legacy, "status");
    eyre::ensure!(written == Some(json!("DEPLOYED")));
    let category = stored_field(&board.store, EntityKind::Task, &pending, "category");
    eyre::ensure!(category == Some(json!("backend")));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_load_has_nothing_left_to_migrate() -> eyre::Result<()> {
    let store = InMemoryDocumentStore::new();
    store.seed(
        EntityKind::Task,
        document(json!({"name": "Old", "status": "In Progress"})),
    );
    let board = board_with(store);

    let first = board.service.load().await;
    let second = board.service.load().await;

    eyre::ensure!(first.migrated == 1);
    eyre::ensure!(second.migrated == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_recomputes_stale_member_progress() -> eyre::Result<()> {
    let store = InMemoryDocumentStore::new();
    let ana = store.seed(
        EntityKind::TeamMember,
        document(json!({"name": "Ana", "role": "Dev", "status": "online", "progress": 100})),
    );
    store.seed(
        EntityKind::Task,
        document(json!({"name": "Todo", "assignee": "Ana", "status": "TODO"})),
    );
    let board = board_with(store);

    let report = board.service.load().await;

    eyre::ensure!(report.progress.updated.len() == 1);
    let members = board.service.members();
    let member = members
        .first()
        .ok_or_else(|| eyre::eyre!("member not loaded"))?;
    eyre::ensure!(member.status() == MemberStatus::Busy);
    eyre::ensure!(member.progress() == 0);
    let stored = stored_field(&board.store, EntityKind::TeamMember, &ana, "status");
    eyre::ensure!(stored == Some(json!("busy")));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nameless_member_records_are_skipped() -> eyre::Result<()> {
    let store = InMemoryDocumentStore::new();
    store.seed(EntityKind::TeamMember, document(json!({"role": "Ghost"})));
    store.seed(EntityKind::TeamMember, document(json!({"name": "Ana"})));
    let board = board_with(store);

    let report = board.service.load().await;

    eyre::ensure!(report.members == 1);
    eyre::ensure!(report.skipped.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_store_loads_an_empty_board() -> eyre::Result<()> {
    let store = InMemoryDocumentStore::new();
    store.seed(EntityKind::Task, document(json!({"name": "Hidden"})));
    store.set_available(false);
    let board = board_with(store);

    let report = board.service.load().await;

    eyre::ensure!(report.unavailable == vec![EntityKind::TeamMember, EntityKind::Task]);
    eyre::ensure!(board.service.tasks().is_empty());
    eyre::ensure!(board.observer.count() == 1);
    Ok(())
}
