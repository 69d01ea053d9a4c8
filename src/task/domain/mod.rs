//! Domain model for the task write path.
//!
//! The task domain models named work items carrying an optional priority
//! reference, keeping all infrastructure concerns outside of the domain
//! boundary. Priority references are plain identifiers here; confirming
//! that a referenced priority exists is the write-path service's job.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskName};
