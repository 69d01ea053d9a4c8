//! In-memory task adapters for testing.

mod task;

pub use task::InMemoryTaskRepository;
