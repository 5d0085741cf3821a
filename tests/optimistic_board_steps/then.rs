//! Then steps for optimistic board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskboard::board::BoardError;
use taskboard::team::domain::MemberStatus;

#[then("the edit fails with a store error")]
fn edit_fails_with_store_error(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_edit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;
    if !matches!(result, Err(BoardError::StoreUnavailable(_))) {
        return Err(eyre::eyre!("expected StoreUnavailable error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let id = world
        .last_task
        .as_ref()
        .and_then(|task| task.id().cloned())
        .ok_or_else(|| eyre::eyre!("missing persisted task"))?;
    let tasks = world.service.tasks();
    let task = tasks
        .iter()
        .find(|task| task.id() == Some(&id))
        .ok_or_else(|| eyre::eyre!("task {id} is no longer shown"))?;
    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then("the completion percentage is {percentage:u8}")]
fn completion_percentage(world: &BoardWorld, percentage: u8) -> Result<(), eyre::Report> {
    let summary = world.service.summary();
    if summary.statistics.percentage != percentage {
        return Err(eyre::eyre!(
            "expected {percentage}%, found {}%",
            summary.statistics.percentage
        ));
    }
    Ok(())
}

#[then(r#"member "{name}" has progress {progress:u8} and status "{status}""#)]
fn member_progress(
    world: &BoardWorld,
    name: String,
    progress: u8,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = MemberStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let members = world.service.members();
    let member = members
        .iter()
        .find(|member| member.name().as_str() == name)
        .ok_or_else(|| eyre::eyre!("no member named {name}"))?;
    if member.progress() != progress || member.status() != expected_status {
        return Err(eyre::eyre!(
            "expected {progress}% {status}, found {}% {}",
            member.progress(),
            member.status()
        ));
    }
    Ok(())
}

#[then("the deletion is refused because tasks are assigned")]
fn deletion_refused(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_delete
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result"))?;
    if !matches!(result, Err(BoardError::MemberHasAssignedTasks { .. })) {
        return Err(eyre::eyre!(
            "expected MemberHasAssignedTasks error, got {result:?}"
        ));
    }
    Ok(())
}
