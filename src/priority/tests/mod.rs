//! Unit tests for the priority context.
