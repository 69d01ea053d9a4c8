//! Priority reference records and validated scalars.

use super::{ColorToken, PriorityDomainError, PriorityId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated non-empty priority display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityLabel(String);

impl PriorityLabel {
    /// Creates a validated priority label.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityDomainError::EmptyPriorityLabel`] if the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PriorityDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PriorityDomainError::EmptyPriorityLabel);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PriorityLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority reference record from the fixed external catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priority {
    id: PriorityId,
    label: PriorityLabel,
    color: ColorToken,
    position: i32,
}

impl Priority {
    /// Creates a priority record from validated components.
    #[must_use]
    pub const fn new(
        id: PriorityId,
        label: PriorityLabel,
        color: ColorToken,
        position: i32,
    ) -> Self {
        Self {
            id,
            label,
            color,
            position,
        }
    }

    /// Creates a priority record from raw stored values.
    ///
    /// # Errors
    ///
    /// Returns a [`PriorityDomainError`] when the label or colour token is
    /// invalid.
    pub fn from_parts(
        id: i32,
        label: &str,
        color: &str,
        position: i32,
    ) -> Result<Self, PriorityDomainError> {
        Ok(Self::new(
            PriorityId::new(id),
            PriorityLabel::new(label)?,
            ColorToken::try_from(color)?,
            position,
        ))
    }

    /// Returns the priority identifier.
    #[must_use]
    pub const fn id(&self) -> PriorityId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &PriorityLabel {
        &self.label
    }

    /// Returns the presentation colour token.
    #[must_use]
    pub const fn color(&self) -> ColorToken {
        self.color
    }

    /// Returns the catalogue ordering position.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
