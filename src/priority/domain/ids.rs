//! Identifier types for the priority domain.

use super::PriorityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stable identifier for a priority catalogue entry.
///
/// Identifiers come from the external reference data and carry no meaning
/// beyond equality; ordering for display comes from the catalogue position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityId(i32);

impl PriorityId {
    /// Creates a priority identifier from its stored value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying stored value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<&str> for PriorityId {
    type Error = PriorityDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse::<i32>()
            .map(Self::new)
            .map_err(|_| PriorityDomainError::MalformedPriorityId(value.to_owned()))
    }
}

impl fmt::Display for PriorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
