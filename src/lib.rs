//! Aalto: task priority assignment core.
//!
//! This crate provides the write path and presentation contract for
//! assigning optional priorities to tasks: normalizing raw priority
//! references, validating them against a fixed reference catalogue, and
//! mapping stored references back to labelled, coloured display options.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`priority`]: Priority reference data, input normalization, and
//!   presentation
//! - [`task`]: Task records and the priority-aware write path

pub mod priority;
pub mod task;
