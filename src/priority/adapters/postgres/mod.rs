//! `PostgreSQL` adapters for priority reference data.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresPriorityRegistry, PriorityPgPool};
