//! In-memory integration tests for task creation and priority updates.

use crate::in_memory::helpers::{TestWriteService, catalog, priority_id_by_label, service};
use aalto::priority::domain::{PriorityCatalog, PriorityInput};
use aalto::task::services::{CreateTaskRequest, UpdateTaskRequest};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_priority_round_trips_the_reference(
    service: TestWriteService,
    catalog: PriorityCatalog,
) -> Result<(), eyre::Report> {
    let high = priority_id_by_label(&catalog, "High")?;
    let created = service
        .create(
            CreateTaskRequest::new("Fix the intake form").with_priority(PriorityInput::from_id(high)),
        )
        .await
        .expect("task creation should succeed");

    let fetched = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed")
        .ok_or_else(|| eyre::eyre!("created task should be retrievable"))?;

    assert_eq!(fetched.priority_id(), Some(high));
    let stored_label = fetched
        .priority_id()
        .and_then(|id| catalog.find(id))
        .map(|priority| priority.label().as_str().to_owned());
    assert_eq!(stored_label.as_deref(), Some("High"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_value_forms_converge_on_the_absent_state(service: TestWriteService) {
    for (name, priority) in [
        ("Omitted field", PriorityInput::Unset),
        ("Explicit null", PriorityInput::Null),
        ("Empty string", PriorityInput::value("")),
    ] {
        let created = service
            .create(CreateTaskRequest::new(name).with_priority(priority))
            .await
            .expect("task creation should succeed");
        assert_eq!(created.priority_id(), None, "input for '{name}'");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_then_replace_a_priority(
    service: TestWriteService,
    catalog: PriorityCatalog,
) -> Result<(), eyre::Report> {
    let low = priority_id_by_label(&catalog, "Low")?;
    let high = priority_id_by_label(&catalog, "High")?;

    let created = service
        .create(CreateTaskRequest::new("Escalating incident"))
        .await
        .expect("task creation should succeed");

    let assigned = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_priority(PriorityInput::from_id(low)),
        )
        .await
        .expect("assignment should succeed");
    assert_eq!(assigned.priority_id(), Some(low));

    let replaced = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_priority(PriorityInput::from_id(high)),
        )
        .await
        .expect("replacement should succeed");
    assert_eq!(replaced.priority_id(), Some(high));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_twice_converges_on_the_same_state(
    service: TestWriteService,
    catalog: PriorityCatalog,
) -> Result<(), eyre::Report> {
    let medium = priority_id_by_label(&catalog, "Medium")?;
    let created = service
        .create(CreateTaskRequest::new("Triaged chore").with_priority(PriorityInput::from_id(medium)))
        .await
        .expect("task creation should succeed");

    let cleared = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_priority(PriorityInput::Null),
        )
        .await
        .expect("first clear should succeed");
    assert_eq!(cleared.priority_id(), None);

    // A second clear, submitted as an empty string this time, is a no-op:
    // the stored task is byte-for-byte the one the first clear produced.
    let cleared_again = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_priority(PriorityInput::value("")),
        )
        .await
        .expect("second clear should succeed");
    assert_eq!(cleared_again, cleared);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rename_preserves_the_stored_priority(
    service: TestWriteService,
    catalog: PriorityCatalog,
) -> Result<(), eyre::Report> {
    let urgent = priority_id_by_label(&catalog, "Urgent")?;
    let created = service
        .create(CreateTaskRequest::new("Original name").with_priority(PriorityInput::from_id(urgent)))
        .await
        .expect("task creation should succeed");

    let renamed = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_name("Renamed without touching priority"),
        )
        .await
        .expect("rename should succeed");

    assert_eq!(renamed.name().as_str(), "Renamed without touching priority");
    assert_eq!(renamed.priority_id(), Some(urgent));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_reference_is_rejected_and_nothing_is_written(
    service: TestWriteService,
    catalog: PriorityCatalog,
) -> Result<(), eyre::Report> {
    let low = priority_id_by_label(&catalog, "Low")?;
    let created = service
        .create(CreateTaskRequest::new("Guarded task").with_priority(PriorityInput::from_id(low)))
        .await
        .expect("task creation should succeed");

    let result = service
        .update(
            created.id(),
            UpdateTaskRequest::new()
                .with_name("Should not stick")
                .with_priority(PriorityInput::value("9999")),
        )
        .await;

    let Err(error) = result else {
        return Err(eyre::eyre!(
            "update with an unknown reference should be rejected"
        ));
    };
    assert_eq!(error.field(), Some("priority_id"));

    let fetched = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
    Ok(())
}
