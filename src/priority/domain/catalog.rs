//! Fixed, ordered catalogue of selectable priorities.

use super::{Priority, PriorityCatalogError, PriorityId};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw catalogue entry as found in an external JSON document.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: i32,
    label: String,
    color: String,
    position: i32,
}

/// Ordered, duplicate-free collection of priority reference records.
///
/// Entries are ordered by catalogue position with identifier as tiebreak, so
/// option lists derived from the catalogue are stable across loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityCatalog {
    priorities: Vec<Priority>,
}

impl PriorityCatalog {
    /// Assembles a catalogue from priority records.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityCatalogError::DuplicatePriorityId`] when two records
    /// share an identifier.
    pub fn new(priorities: Vec<Priority>) -> Result<Self, PriorityCatalogError> {
        let mut seen = HashSet::with_capacity(priorities.len());
        for priority in &priorities {
            if !seen.insert(priority.id()) {
                return Err(PriorityCatalogError::DuplicatePriorityId(priority.id()));
            }
        }

        let mut ordered = priorities;
        ordered.sort_by_key(|priority| (priority.position(), priority.id().value()));
        Ok(Self {
            priorities: ordered,
        })
    }

    /// Returns the built-in catalogue shipped with the system.
    ///
    /// The same rows are inserted by the seed migration, so freshly migrated
    /// databases and the built-in catalogue agree.
    #[expect(
        clippy::expect_used,
        clippy::missing_panics_doc,
        reason = "built-in catalogue entries are statically valid"
    )]
    #[must_use]
    pub fn builtin() -> Self {
        let priorities = [
            (1, "Low", "gray", 1),
            (2, "Medium", "yellow", 2),
            (3, "High", "orange", 3),
            (4, "Urgent", "red", 4),
        ]
        .into_iter()
        .map(|(id, label, color, position)| Priority::from_parts(id, label, color, position))
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in priority definitions are valid");

        Self::new(priorities).expect("built-in priority identifiers are unique")
    }

    /// Loads a catalogue from an external JSON document.
    ///
    /// The document is an array of `{id, label, color, position}` entries.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityCatalogError`] when the document cannot be parsed,
    /// an entry fails domain validation, or identifiers collide.
    pub fn from_json(document: &str) -> Result<Self, PriorityCatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(document)?;
        let priorities = entries
            .into_iter()
            .map(|entry| Priority::from_parts(entry.id, &entry.label, &entry.color, entry.position))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(priorities)
    }

    /// Finds a catalogue entry by identifier.
    ///
    /// Returns `None` when the identifier has no entry.
    #[must_use]
    pub fn find(&self, id: PriorityId) -> Option<&Priority> {
        self.priorities.iter().find(|priority| priority.id() == id)
    }

    /// Returns the catalogue entries in display order.
    #[must_use]
    pub fn priorities(&self) -> &[Priority] {
        &self.priorities
    }

    /// Returns the number of catalogue entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Returns `true` when the catalogue has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}
