//! Application services for task write orchestration.

mod write_path;

pub use write_path::{
    CreateTaskRequest, NAME_FIELD, TaskWriteError, TaskWriteResult, TaskWriteService,
    UpdateTaskRequest,
};
