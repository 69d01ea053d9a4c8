//! Domain model for priority reference data.
//!
//! The priority domain models the fixed catalogue of selectable priorities
//! and the tri-state input used when a task's priority reference is written,
//! keeping all infrastructure concerns outside of the domain boundary.

mod catalog;
mod color;
mod error;
mod ids;
mod input;
mod priority;

pub use catalog::PriorityCatalog;
pub use color::ColorToken;
pub use error::{PriorityCatalogError, PriorityDomainError};
pub use ids::PriorityId;
pub use input::{PriorityInput, PriorityWriteIntent};
pub use priority::{Priority, PriorityLabel};
