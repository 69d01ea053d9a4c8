//! Task aggregate root and its validated name type.

use super::{TaskDomainError, TaskId};
use crate::priority::domain::PriorityId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, trimmed task name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the task name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task aggregate root.
///
/// The priority reference is stored as a plain identifier; the write path
/// confirms any incoming reference against the priority registry before a
/// task carrying it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: Option<String>,
    priority_id: Option<PriorityId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority reference, if any.
    pub priority_id: Option<PriorityId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task.
    ///
    /// The description is normalized: blank values collapse to `None`.
    #[must_use]
    pub fn new(
        name: TaskName,
        description: Option<String>,
        priority_id: Option<PriorityId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            name,
            description: normalize_description(description),
            priority_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            priority_id: data.priority_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the stored priority reference, if any.
    #[must_use]
    pub const fn priority_id(&self) -> Option<PriorityId> {
        self.priority_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the task.
    ///
    /// Assigning the current name is a no-op that leaves `updated_at`
    /// untouched.
    pub fn rename(&mut self, name: TaskName, clock: &impl Clock) {
        if self.name == name {
            return;
        }
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the description.
    ///
    /// Blank values collapse to `None`. Writing the stored description is a
    /// no-op that leaves `updated_at` untouched.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        let normalized = normalize_description(Some(description.into()));
        if self.description == normalized {
            return;
        }
        self.description = normalized;
        self.touch(clock);
    }

    /// Replaces the priority reference.
    ///
    /// Writing the stored value is a no-op that leaves `updated_at`
    /// untouched, so repeated clears of an already-unset priority converge
    /// on the same state.
    pub fn set_priority(&mut self, priority_id: Option<PriorityId>, clock: &impl Clock) {
        if self.priority_id == priority_id {
            return;
        }
        self.priority_id = priority_id;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Trims a description and collapses blank values to `None`.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.and_then(|raw| {
        let normalized = raw.trim();
        (!normalized.is_empty()).then_some(normalized.to_owned())
    })
}
