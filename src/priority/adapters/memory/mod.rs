//! In-memory adapters for priority reference data.

mod registry;

pub use registry::InMemoryPriorityRegistry;
