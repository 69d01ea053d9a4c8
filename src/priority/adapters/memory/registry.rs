//! In-memory registry for priority reference tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::priority::{
    domain::{Priority, PriorityCatalog, PriorityId},
    ports::{PriorityRegistry, PriorityRegistryError, PriorityRegistryResult},
};

/// Thread-safe in-memory priority registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriorityRegistry {
    state: Arc<RwLock<HashMap<PriorityId, Priority>>>,
}

impl InMemoryPriorityRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the entries of a catalogue.
    #[must_use]
    pub fn from_catalog(catalog: &PriorityCatalog) -> Self {
        let entries = catalog
            .priorities()
            .iter()
            .map(|priority| (priority.id(), priority.clone()))
            .collect();
        Self {
            state: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl PriorityRegistry for InMemoryPriorityRegistry {
    async fn find_by_id(&self, id: PriorityId) -> PriorityRegistryResult<Option<Priority>> {
        let state = self.state.read().map_err(|err| {
            PriorityRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> PriorityRegistryResult<Vec<Priority>> {
        let state = self.state.read().map_err(|err| {
            PriorityRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut priorities: Vec<Priority> = state.values().cloned().collect();
        priorities.sort_by_key(|priority| (priority.position(), priority.id().value()));
        Ok(priorities)
    }
}
