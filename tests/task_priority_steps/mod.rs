//! Step definitions for task priority assignment scenarios.

pub mod world;

mod given;
mod when;
