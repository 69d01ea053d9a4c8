//! Task write path for Aalto.
//!
//! This module implements task creation and update with tri-state priority
//! handling: an omitted priority field preserves the stored reference, an
//! explicit null (or blank) clears it, and a concrete value is confirmed
//! against the priority registry before anything is persisted. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
