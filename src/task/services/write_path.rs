//! Service layer for task creation and update with priority handling.

use crate::priority::{
    domain::PriorityInput,
    ports::PriorityRegistry,
    services::{PriorityNormalizer, PriorityResolution, PriorityResolutionError},
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskName},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Field key reported when task name validation fails.
pub const NAME_FIELD: &str = "name";

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    description: Option<String>,
    priority: PriorityInput,
}

impl CreateTaskRequest {
    /// Creates a request with the required task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            priority: PriorityInput::Unset,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the submitted priority field.
    #[must_use]
    pub fn with_priority(mut self, priority: PriorityInput) -> Self {
        self.priority = priority;
        self
    }
}

/// Request payload for updating a task.
///
/// Every field is tri-state: an omitted field leaves the stored value
/// untouched, while a submitted field replaces it. The priority field
/// additionally distinguishes an explicit null, which clears the stored
/// reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    name: Option<String>,
    description: Option<String>,
    priority: PriorityInput,
}

impl UpdateTaskRequest {
    /// Creates an empty update that would leave the task unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the submitted priority field.
    #[must_use]
    pub fn with_priority(mut self, priority: PriorityInput) -> Self {
        self.priority = priority;
        self
    }
}

/// Service-level errors for task write operations.
#[derive(Debug, Error)]
pub enum TaskWriteError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Priority reference resolution failed.
    #[error(transparent)]
    Priority(#[from] PriorityResolutionError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskWriteError {
    /// Returns the input field implicated by a validation failure.
    ///
    /// Infrastructure failures carry no field key.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Domain(TaskDomainError::EmptyTaskName) => Some(NAME_FIELD),
            Self::Priority(err) => err.field(),
            Self::Repository(_) => None,
        }
    }
}

/// Result type for task write service operations.
pub type TaskWriteResult<T> = Result<T, TaskWriteError>;

/// Task write orchestration service.
///
/// Couples task persistence with priority reference resolution so that no
/// task row is written while carrying an unconfirmed priority reference.
#[derive(Clone)]
pub struct TaskWriteService<R, P, C>
where
    R: TaskRepository,
    P: PriorityRegistry,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    normalizer: PriorityNormalizer<P>,
    clock: Arc<C>,
}

impl<R, P, C> TaskWriteService<R, P, C>
where
    R: TaskRepository,
    P: PriorityRegistry,
    C: Clock + Send + Sync,
{
    /// Creates a new task write service.
    #[must_use]
    pub const fn new(repository: Arc<R>, registry: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            repository,
            normalizer: PriorityNormalizer::new(registry),
            clock,
        }
    }

    /// Creates a new task.
    ///
    /// The priority field collapses to `None` unless a non-blank value was
    /// submitted, in which case the reference is confirmed against the
    /// registry before the task is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWriteError`] when name validation fails, the priority
    /// reference cannot be confirmed, or the repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskWriteResult<Task> {
        let CreateTaskRequest {
            name,
            description,
            priority,
        } = request;

        let task_name = TaskName::new(name)?;
        let priority_id = self.normalizer.resolve_create(&priority).await?;

        let task = Task::new(task_name, description, priority_id, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Updates an existing task.
    ///
    /// Omitted fields retain their stored values. A submitted priority is
    /// resolved before any field is touched, so a rejected reference leaves
    /// the stored task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWriteError`] when the task does not exist, validation
    /// fails, or the repository rejects persistence.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskWriteResult<Task> {
        let UpdateTaskRequest {
            name,
            description,
            priority,
        } = request;

        let mut task = self.find_by_id_or_error(id).await?;
        let resolution = self.normalizer.resolve_update(&priority).await?;

        if let Some(new_name) = name {
            task.rename(TaskName::new(new_name)?, &*self.clock);
        }
        if let Some(new_description) = description {
            task.set_description(new_description, &*self.clock);
        }
        if let PriorityResolution::Store(priority_id) = resolution {
            task.set_priority(priority_id, &*self.clock);
        }

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWriteError::Repository`] when persistence lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskWriteResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskWriteResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}
