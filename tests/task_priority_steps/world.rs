//! Shared world state for task priority assignment BDD scenarios.

use std::sync::Arc;

use aalto::priority::{
    adapters::memory::InMemoryPriorityRegistry,
    domain::{Priority, PriorityCatalog, PriorityId, PriorityInput},
};
use aalto::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskWriteError, TaskWriteService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskWriteService<InMemoryTaskRepository, InMemoryPriorityRegistry, DefaultClock>;

/// Scenario world for task priority behaviour tests.
pub struct PriorityWorld {
    pub catalog: PriorityCatalog,
    pub service: TestTaskService,
    pub task_name: Option<String>,
    pub pending_priority: PriorityInput,
    pub stored_task: Option<Task>,
    pub last_write_error: Option<TaskWriteError>,
}

impl PriorityWorld {
    /// Creates a world with the built-in catalogue and empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let catalog = PriorityCatalog::builtin();
        let service = TaskWriteService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryPriorityRegistry::from_catalog(&catalog)),
            Arc::new(DefaultClock),
        );
        Self {
            catalog,
            service,
            task_name: None,
            pending_priority: PriorityInput::Unset,
            stored_task: None,
            last_write_error: None,
        }
    }

    /// Looks up a catalogue priority identifier by display label.
    ///
    /// # Errors
    ///
    /// Returns an error when no catalogue entry carries the label.
    pub fn priority_id_by_label(&self, label: &str) -> Result<PriorityId, eyre::Report> {
        self.catalog
            .priorities()
            .iter()
            .find(|priority| priority.label().as_str() == label)
            .map(Priority::id)
            .ok_or_else(|| eyre::eyre!("no priority labelled '{label}'"))
    }
}

impl Default for PriorityWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PriorityWorld {
    PriorityWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
