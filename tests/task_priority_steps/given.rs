//! Given steps for task priority assignment BDD scenarios.

use super::world::{PriorityWorld, run_async};
use aalto::priority::domain::PriorityInput;
use aalto::task::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task request named "{name}""#)]
fn task_request_named(world: &mut PriorityWorld, name: String) {
    world.task_name = Some(name);
    world.pending_priority = PriorityInput::Unset;
}

#[given(r#"the request priority is "{label}""#)]
fn request_priority_is(world: &mut PriorityWorld, label: String) -> Result<(), eyre::Report> {
    let id = world.priority_id_by_label(&label)?;
    world.pending_priority = PriorityInput::from_id(id);
    Ok(())
}

#[given("the request priority is null")]
fn request_priority_is_null(world: &mut PriorityWorld) {
    world.pending_priority = PriorityInput::Null;
}

#[given("the request priority is an empty string")]
fn request_priority_is_empty(world: &mut PriorityWorld) {
    world.pending_priority = PriorityInput::value("");
}

#[given(r#"the request priority is the unknown reference "{raw}""#)]
fn request_priority_is_unknown(world: &mut PriorityWorld, raw: String) {
    world.pending_priority = PriorityInput::value(raw);
}

#[given(r#"a stored task named "{name}" without a priority"#)]
fn stored_task_without_priority(
    world: &mut PriorityWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(name)))
        .wrap_err("create task without a priority")?;
    world.stored_task = Some(created);
    Ok(())
}

#[given(r#"a stored task named "{name}" with the priority "{label}""#)]
fn stored_task_with_priority(
    world: &mut PriorityWorld,
    name: String,
    label: String,
) -> Result<(), eyre::Report> {
    let id = world.priority_id_by_label(&label)?;
    let request = CreateTaskRequest::new(name).with_priority(PriorityInput::from_id(id));
    let created =
        run_async(world.service.create(request)).wrap_err("create task with a priority")?;
    world.stored_task = Some(created);
    Ok(())
}
