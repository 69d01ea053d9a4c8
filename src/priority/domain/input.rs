//! Tri-state boundary input for priority reference writes.

use super::PriorityId;

/// Raw priority reference input as received at the write boundary.
///
/// Callers translate their transport's field states into this type: a field
/// that was never sent becomes [`PriorityInput::Unset`], an explicit null
/// becomes [`PriorityInput::Null`], and anything else arrives as the raw
/// string, empty or not. No information is lost before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PriorityInput {
    /// The field was absent from the input.
    #[default]
    Unset,
    /// The field was present with an explicit null.
    Null,
    /// The field was present with a raw identifier string.
    Value(String),
}

impl PriorityInput {
    /// Creates a raw-value input.
    #[must_use]
    pub fn value(raw: impl Into<String>) -> Self {
        Self::Value(raw.into())
    }

    /// Creates an input referencing a known identifier.
    #[must_use]
    pub fn from_id(id: PriorityId) -> Self {
        Self::Value(id.to_string())
    }

    /// Collapses the input into a write intent.
    ///
    /// Missing input retains the stored value; null and empty-string input
    /// both clear it; any other value is a set request carrying the trimmed
    /// raw identifier, still pending registry validation.
    #[must_use]
    pub fn intent(&self) -> PriorityWriteIntent {
        match self {
            Self::Unset => PriorityWriteIntent::Retain,
            Self::Null => PriorityWriteIntent::Clear,
            Self::Value(raw) => {
                let normalized = raw.trim();
                if normalized.is_empty() {
                    PriorityWriteIntent::Clear
                } else {
                    PriorityWriteIntent::Set(normalized.to_owned())
                }
            }
        }
    }
}

impl From<Option<String>> for PriorityInput {
    /// Converts a present-but-nullable field into input.
    ///
    /// `None` maps to an explicit null, not to an absent field: use
    /// [`PriorityInput::Unset`] for fields that were never sent.
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

/// Canonical write intent derived from raw priority input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityWriteIntent {
    /// Leave the stored reference untouched.
    Retain,
    /// Clear the stored reference.
    Clear,
    /// Set the reference to the trimmed raw identifier, once validated.
    Set(String),
}
