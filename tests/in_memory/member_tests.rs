//! In-memory integration tests for team members and progress persistence.

use super::helpers::{Board, board, stored_field};
use rstest::rstest;
use serde_json::json;
use taskboard::board::{BoardError, UpdateMemberRequest};
use taskboard::store::EntityKind;
use taskboard::task::domain::{TaskDraft, TaskStatus};
use taskboard::team::domain::{MemberId, MemberStatus};

async fn member_id(board: &Board, name: &str, role: &str) -> eyre::Result<MemberId> {
    let member = board.service.add_member(name, role).await?;
    member
        .id()
        .cloned()
        .ok_or_else(|| eyre::eyre!("member {name} has no id"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn progress_follows_task_completion_into_the_store(board: Board) -> eyre::Result<()> {
    let ana = member_id(&board, "Ana", "Frontend").await?;
    for (name, status) in [
        ("One", TaskStatus::Deployed),
        ("Two", TaskStatus::InProgress),
        ("Three", TaskStatus::Todo),
    ] {
        board
            .service
            .create_task(TaskDraft::new(name).with_assignee("Ana").with_status(status))
            .await?;
    }

    let progress = stored_field(
        &board.store,
        EntityKind::TeamMember,
        ana.as_document_id(),
        "progress",
    );
    let status = stored_field(
        &board.store,
        EntityKind::TeamMember,
        ana.as_document_id(),
        "status",
    );
    eyre::ensure!(progress == Some(json!(33)), "progress {progress:?}");
    eyre::ensure!(status == Some(json!("in-progress")), "status {status:?}");
    let summary = board
        .observer
        .last()
        .ok_or_else(|| eyre::eyre!("no summary published"))?;
    let entry = summary
        .members
        .first()
        .ok_or_else(|| eyre::eyre!("no member progress"))?;
    eyre::ensure!((entry.assigned, entry.done, entry.progress) == (3, 1, 33));
    eyre::ensure!(entry.status == MemberStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_with_assigned_tasks_cannot_be_deleted(board: Board) -> eyre::Result<()> {
    let ben = member_id(&board, "Ben", "Backend").await?;
    board
        .service
        .create_task(TaskDraft::new("API").with_assignee("Ben"))
        .await?;

    let result = board.service.delete_member(&ben).await;

    eyre::ensure!(
        matches!(result, Err(BoardError::MemberHasAssignedTasks { count: 1, .. })),
        "unexpected result {result:?}"
    );
    eyre::ensure!(board.service.members().len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_without_tasks_is_deleted_from_the_store(board: Board) -> eyre::Result<()> {
    let cy = member_id(&board, "Cy", "QA").await?;

    board.service.delete_member(&cy).await?;

    eyre::ensure!(board.service.members().is_empty());
    eyre::ensure!(board.store.is_empty(EntityKind::TeamMember));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_member_names_are_rejected(board: Board) -> eyre::Result<()> {
    member_id(&board, "Dee", "Design").await?;

    let result = board.service.add_member("  Dee ", "Other").await;

    eyre::ensure!(matches!(result, Err(BoardError::DuplicateMemberName(_))));
    eyre::ensure!(board.store.len(EntityKind::TeamMember) == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reserved_member_role_is_read_only(board: Board) -> eyre::Result<()> {
    let rhea = member_id(&board, "Rhea", "Lead").await?;

    let role_change = board
        .service
        .update_member(&rhea, UpdateMemberRequest::new().with_role("Intern"))
        .await;
    let same_role = board
        .service
        .update_member(&rhea, UpdateMemberRequest::new().with_role("Lead"))
        .await;

    eyre::ensure!(matches!(role_change, Err(BoardError::RoleLocked(_))));
    eyre::ensure!(same_role.is_ok());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn role_edit_keeps_derived_progress(board: Board) -> eyre::Result<()> {
    let eve = member_id(&board, "Eve", "Ops").await?;
    board
        .service
        .create_task(
            TaskDraft::new("Deploy")
                .with_assignee("Eve")
                .with_status(TaskStatus::Deployed),
        )
        .await?;

    let edited = board
        .service
        .update_member(&eve, UpdateMemberRequest::new().with_role("SRE"))
        .await?;

    eyre::ensure!(edited.role() == "SRE");
    eyre::ensure!(edited.progress() == 100);
    eyre::ensure!(edited.status() == MemberStatus::Online);
    Ok(())
}
