//! Presentation mapping between stored priority references and display
//! options.
//!
//! The presenter is the UI-facing view of the catalogue: it enumerates the
//! selectable options in stable order, resolves a stored reference to its
//! label and colour, and emits canonical values when the user selects or
//! clears a priority. Display resolution always works; emitting changes
//! requires edit capability.

use crate::priority::domain::{ColorToken, Priority, PriorityCatalog, PriorityId};
use serde::Serialize;
use thiserror::Error;

/// Display tuple for a single selectable priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityOption {
    /// Canonical value emitted when the option is selected.
    pub value: PriorityId,
    /// Display label.
    pub label: String,
    /// Presentation colour token.
    pub color: ColorToken,
}

impl PriorityOption {
    fn from_priority(priority: &Priority) -> Self {
        Self {
            value: priority.id(),
            label: priority.label().as_str().to_owned(),
            color: priority.color(),
        }
    }
}

/// Resolved display state for a stored priority reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrioritySelection {
    /// The stored value resolves to a catalogue option.
    Selected(PriorityOption),
    /// No stored value, or the stored value has no catalogue entry.
    Placeholder,
}

impl PrioritySelection {
    /// Returns `true` when a catalogue option is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// Returns the selected option, if any.
    #[must_use]
    pub const fn option(&self) -> Option<&PriorityOption> {
        match self {
            Self::Selected(option) => Some(option),
            Self::Placeholder => None,
        }
    }
}

/// Whether the presenter may emit changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCapability {
    /// Selection and clearing emit new canonical values.
    Editable,
    /// Display only; selection and clearing are rejected.
    ReadOnly,
}

/// Errors returned when a presenter interaction is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrioritySelectionError {
    /// The presenter lacks edit capability.
    #[error("priority selection is read-only")]
    ReadOnly,

    /// The identifier names no catalogue option.
    #[error("unknown priority option: {0}")]
    UnknownOption(PriorityId),
}

/// Maps stored priority references to display state and emits canonical
/// values for edits.
#[derive(Debug, Clone)]
pub struct PriorityOptionPresenter {
    catalog: PriorityCatalog,
    capability: EditCapability,
}

impl PriorityOptionPresenter {
    /// Creates a presenter over a catalogue with the given edit capability.
    #[must_use]
    pub const fn new(catalog: PriorityCatalog, capability: EditCapability) -> Self {
        Self {
            catalog,
            capability,
        }
    }

    /// Returns the selectable options in catalogue display order.
    #[must_use]
    pub fn options(&self) -> Vec<PriorityOption> {
        self.catalog
            .priorities()
            .iter()
            .map(PriorityOption::from_priority)
            .collect()
    }

    /// Resolves a stored reference to its display state.
    ///
    /// A stored value without a catalogue entry falls back to the
    /// placeholder rather than failing: stale references degrade to "no
    /// selection" on screen, and the write path is where they are rejected.
    #[must_use]
    pub fn resolve(&self, stored: Option<PriorityId>) -> PrioritySelection {
        stored
            .and_then(|id| self.catalog.find(id))
            .map_or(PrioritySelection::Placeholder, |priority| {
                PrioritySelection::Selected(PriorityOption::from_priority(priority))
            })
    }

    /// Emits the canonical value for selecting an option.
    ///
    /// # Errors
    ///
    /// Returns [`PrioritySelectionError::ReadOnly`] without edit capability,
    /// or [`PrioritySelectionError::UnknownOption`] when the identifier is
    /// not in the catalogue.
    pub fn select(&self, id: PriorityId) -> Result<Option<PriorityId>, PrioritySelectionError> {
        if !self.can_edit() {
            return Err(PrioritySelectionError::ReadOnly);
        }
        if self.catalog.find(id).is_none() {
            return Err(PrioritySelectionError::UnknownOption(id));
        }
        Ok(Some(id))
    }

    /// Emits the canonical value for clearing the selection.
    ///
    /// # Errors
    ///
    /// Returns [`PrioritySelectionError::ReadOnly`] without edit capability.
    pub fn clear(&self) -> Result<Option<PriorityId>, PrioritySelectionError> {
        if !self.can_edit() {
            return Err(PrioritySelectionError::ReadOnly);
        }
        Ok(None)
    }

    /// Returns `true` when the clear affordance should be shown.
    ///
    /// Clearing is offered only when the stored value resolves to a
    /// catalogue option and the presenter is editable.
    #[must_use]
    pub fn offers_clear(&self, stored: Option<PriorityId>) -> bool {
        self.resolve(stored).is_selected() && self.can_edit()
    }

    /// Returns `true` when the presenter may emit changes.
    #[must_use]
    pub const fn can_edit(&self) -> bool {
        matches!(self.capability, EditCapability::Editable)
    }

    /// Returns the presenter's edit capability.
    #[must_use]
    pub const fn capability(&self) -> EditCapability {
        self.capability
    }

    /// Returns the underlying catalogue.
    #[must_use]
    pub const fn catalog(&self) -> &PriorityCatalog {
        &self.catalog
    }
}
