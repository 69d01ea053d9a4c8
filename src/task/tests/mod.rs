//! Unit tests for the task write path.
