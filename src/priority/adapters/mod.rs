//! Adapter implementations of the priority registry port.

pub mod memory;
pub mod postgres;
