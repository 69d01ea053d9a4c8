//! When steps for task priority assignment BDD scenarios.

use super::world::{PriorityWorld, run_async};
use aalto::priority::domain::PriorityInput;
use aalto::task::services::{CreateTaskRequest, UpdateTaskRequest};
use rstest_bdd_macros::when;

#[when("the task is created")]
fn create_the_task(world: &mut PriorityWorld) -> Result<(), eyre::Report> {
    let name = world
        .task_name
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task name in scenario world"))?;
    let request = CreateTaskRequest::new(name).with_priority(world.pending_priority.clone());

    match run_async(world.service.create(request)) {
        Ok(task) => world.stored_task = Some(task),
        Err(error) => world.last_write_error = Some(error),
    }
    Ok(())
}

fn apply_update(world: &mut PriorityWorld, request: UpdateTaskRequest) -> Result<(), eyre::Report> {
    let task = world
        .stored_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;

    match run_async(world.service.update(task.id(), request)) {
        Ok(updated) => world.stored_task = Some(updated),
        Err(error) => world.last_write_error = Some(error),
    }
    Ok(())
}

#[when(r#"the task priority is updated to "{label}""#)]
fn update_priority_to(world: &mut PriorityWorld, label: String) -> Result<(), eyre::Report> {
    let id = world.priority_id_by_label(&label)?;
    apply_update(
        world,
        UpdateTaskRequest::new().with_priority(PriorityInput::from_id(id)),
    )
}

#[when(r#"the task priority is updated to the unknown reference "{raw}""#)]
fn update_priority_to_unknown(world: &mut PriorityWorld, raw: String) -> Result<(), eyre::Report> {
    apply_update(
        world,
        UpdateTaskRequest::new().with_priority(PriorityInput::value(raw)),
    )
}

#[when("the task priority is cleared")]
fn clear_priority(world: &mut PriorityWorld) -> Result<(), eyre::Report> {
    apply_update(
        world,
        UpdateTaskRequest::new().with_priority(PriorityInput::Null),
    )
}

#[when(r#"the task is renamed to "{name}""#)]
fn rename_task(world: &mut PriorityWorld, name: String) -> Result<(), eyre::Report> {
    apply_update(world, UpdateTaskRequest::new().with_name(name))
}
