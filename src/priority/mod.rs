//! Priority reference data and assignment input handling for Aalto.
//!
//! This module owns the fixed priority catalogue, the registry port used to
//! confirm that stored references exist, the normalizer that collapses
//! missing, null, and empty-string input into one canonical absent state,
//! and the presenter that maps stored references to labelled, coloured
//! display options. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Display mapping in [`presenter`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presenter;
pub mod services;

#[cfg(test)]
mod tests;
