//! Port contracts for priority reference data.
//!
//! Ports define infrastructure-agnostic interfaces used by priority
//! normalization and presentation.

pub mod registry;

pub use registry::{PriorityRegistry, PriorityRegistryError, PriorityRegistryResult};
