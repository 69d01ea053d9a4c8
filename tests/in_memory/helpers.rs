//! Shared test helpers for in-memory write-path integration tests.

use aalto::priority::{
    adapters::memory::InMemoryPriorityRegistry,
    domain::{Priority, PriorityCatalog, PriorityId},
};
use aalto::task::{adapters::memory::InMemoryTaskRepository, services::TaskWriteService};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Write service wired to in-memory adapters.
pub type TestWriteService =
    TaskWriteService<InMemoryTaskRepository, InMemoryPriorityRegistry, DefaultClock>;

/// Provides the built-in priority catalogue.
#[fixture]
pub fn catalog() -> PriorityCatalog {
    PriorityCatalog::builtin()
}

/// Provides a write service backed by fresh in-memory adapters seeded with
/// the built-in catalogue.
#[fixture]
pub fn service(catalog: PriorityCatalog) -> TestWriteService {
    TaskWriteService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryPriorityRegistry::from_catalog(&catalog)),
        Arc::new(DefaultClock),
    )
}

/// Looks up a catalogue priority identifier by display label.
///
/// # Errors
///
/// Returns an error when no catalogue entry carries the label.
pub fn priority_id_by_label(
    catalog: &PriorityCatalog,
    label: &str,
) -> Result<PriorityId, eyre::Report> {
    catalog
        .priorities()
        .iter()
        .find(|priority| priority.label().as_str() == label)
        .map(Priority::id)
        .ok_or_else(|| eyre::eyre!("no priority labelled '{label}'"))
}
