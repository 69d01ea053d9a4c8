//! Normalization and registry validation for priority reference input.
//!
//! Provides [`PriorityNormalizer`] which converts raw boundary input into
//! canonical stored values: missing, null, and empty-string input collapse
//! to the absent state, while identifier input must confirm against the
//! registry before it may be stored.

use crate::priority::{
    domain::{PriorityId, PriorityInput, PriorityWriteIntent},
    ports::{PriorityRegistry, PriorityRegistryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Field key reported for priority reference validation failures.
pub const PRIORITY_FIELD: &str = "priority_id";

/// Resolution outcome for the priority field of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityResolution {
    /// Leave the stored reference unchanged.
    Retain,
    /// Store the given canonical value.
    Store(Option<PriorityId>),
}

/// Errors returned while resolving priority reference input.
#[derive(Debug, Clone, Error)]
pub enum PriorityResolutionError {
    /// The input named a priority with no registry record.
    #[error("priority reference does not exist: '{0}'")]
    UnknownPriority(String),

    /// Registry lookup failed.
    #[error(transparent)]
    Registry(#[from] PriorityRegistryError),
}

impl PriorityResolutionError {
    /// Returns the input field implicated by a validation failure.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::UnknownPriority(_) => Some(PRIORITY_FIELD),
            Self::Registry(_) => None,
        }
    }
}

/// Result type for priority resolution operations.
pub type PriorityResolutionResult<T> = Result<T, PriorityResolutionError>;

/// Converts raw priority input into validated canonical references.
#[derive(Debug, Clone)]
pub struct PriorityNormalizer<R>
where
    R: PriorityRegistry,
{
    registry: Arc<R>,
}

impl<R> PriorityNormalizer<R>
where
    R: PriorityRegistry,
{
    /// Creates a normalizer over a priority registry.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Resolves priority input for a task being created.
    ///
    /// With no prior value to preserve, missing input and clearing input
    /// both yield the absent state.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityResolutionError::UnknownPriority`] when the input
    /// names a reference the registry does not hold, or
    /// [`PriorityResolutionError::Registry`] when lookup fails.
    pub async fn resolve_create(
        &self,
        input: &PriorityInput,
    ) -> PriorityResolutionResult<Option<PriorityId>> {
        match input.intent() {
            PriorityWriteIntent::Retain | PriorityWriteIntent::Clear => Ok(None),
            PriorityWriteIntent::Set(raw) => Ok(Some(self.confirm(&raw).await?)),
        }
    }

    /// Resolves priority input for a task being updated.
    ///
    /// Missing input retains the stored reference; null and empty-string
    /// input clear it; identifier input stores the confirmed reference.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityResolutionError::UnknownPriority`] when the input
    /// names a reference the registry does not hold, or
    /// [`PriorityResolutionError::Registry`] when lookup fails.
    pub async fn resolve_update(
        &self,
        input: &PriorityInput,
    ) -> PriorityResolutionResult<PriorityResolution> {
        match input.intent() {
            PriorityWriteIntent::Retain => Ok(PriorityResolution::Retain),
            PriorityWriteIntent::Clear => Ok(PriorityResolution::Store(None)),
            PriorityWriteIntent::Set(raw) => {
                Ok(PriorityResolution::Store(Some(self.confirm(&raw).await?)))
            }
        }
    }

    /// Confirms a raw identifier against the registry.
    ///
    /// Malformed identifiers and identifiers without a registry record fail
    /// identically: the reference does not exist.
    async fn confirm(&self, raw: &str) -> PriorityResolutionResult<PriorityId> {
        let Ok(id) = PriorityId::try_from(raw) else {
            return Err(PriorityResolutionError::UnknownPriority(raw.to_owned()));
        };

        let found = self.registry.find_by_id(id).await?;
        if found.is_none() {
            return Err(PriorityResolutionError::UnknownPriority(raw.to_owned()));
        }
        Ok(id)
    }
}
