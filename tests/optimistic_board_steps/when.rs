//! When steps for optimistic board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;

#[when("the task is marked completed")]
fn mark_completed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_task
        .as_ref()
        .and_then(|task| task.id().cloned())
        .ok_or_else(|| eyre::eyre!("missing persisted task in scenario world"))?;
    let result = run_async(world.service.set_task_completed(&id, true));
    world.last_edit = Some(result);
    Ok(())
}

#[when(r#"member "{name}" is deleted"#)]
fn delete_member(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let id = world
        .service
        .members()
        .iter()
        .find(|member| member.name().as_str() == name)
        .and_then(|member| member.id().cloned())
        .ok_or_else(|| eyre::eyre!("no persisted member named {name}"))?;
    let result = run_async(world.service.delete_member(&id));
    world.last_delete = Some(result);
    Ok(())
}
