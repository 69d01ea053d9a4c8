//! Error types for priority domain validation and catalogue loading.

use super::PriorityId;
use thiserror::Error;

/// Errors returned while constructing domain priority values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriorityDomainError {
    /// The priority label is empty after trimming.
    #[error("priority label must not be empty")]
    EmptyPriorityLabel,

    /// The value does not parse as a priority identifier.
    #[error("malformed priority identifier: '{0}'")]
    MalformedPriorityId(String),

    /// The colour token is not part of the presentation palette.
    #[error("unknown colour token: '{0}'")]
    UnknownColorToken(String),
}

/// Errors returned while assembling a priority catalogue.
#[derive(Debug, Error)]
pub enum PriorityCatalogError {
    /// The catalogue document could not be parsed.
    #[error("invalid catalogue document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalogue entry failed domain validation.
    #[error(transparent)]
    Domain(#[from] PriorityDomainError),

    /// Two catalogue entries share the same identifier.
    #[error("duplicate priority identifier: {0}")]
    DuplicatePriorityId(PriorityId),
}
