//! Given steps for optimistic board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::TaskDraft;

#[given(r#"an unassigned task named "{name}""#)]
fn task_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_task(TaskDraft::new(name)))
        .wrap_err("create task for scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"a task named "{name}" assigned to "{assignee}""#)]
fn task_assigned(
    world: &mut BoardWorld,
    name: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(name).with_assignee(assignee);
    let created =
        run_async(world.service.create_task(draft)).wrap_err("create assigned task for scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"a team member named "{name}""#)]
fn team_member(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    run_async(world.service.add_member(&name, "Engineer"))
        .wrap_err("add member for scenario")?;
    Ok(())
}

#[given("the document store is offline")]
fn store_offline(world: &mut BoardWorld) {
    world.store.set_available(false);
}
