//! Registry port for priority reference lookup.

use crate::priority::domain::{Priority, PriorityId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for priority registry operations.
pub type PriorityRegistryResult<T> = Result<T, PriorityRegistryError>;

/// Read-only source of truth for valid priority references.
#[async_trait]
pub trait PriorityRegistry: Send + Sync {
    /// Finds a priority by identifier.
    ///
    /// Returns `None` when the identifier has no record; existence checks
    /// treat that as a validation failure, never as implicit clearing.
    async fn find_by_id(&self, id: PriorityId) -> PriorityRegistryResult<Option<Priority>>;

    /// Returns all priorities in catalogue display order.
    async fn list_all(&self) -> PriorityRegistryResult<Vec<Priority>>;
}

/// Errors returned by priority registry implementations.
#[derive(Debug, Clone, Error)]
pub enum PriorityRegistryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PriorityRegistryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
