//! Diesel row models for priority reference data.

use super::schema::task_priorities;
use diesel::prelude::*;

/// Query result row for priority records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_priorities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PriorityRow {
    /// Stable priority identifier.
    pub id: i32,
    /// Display label.
    pub label: String,
    /// Presentation colour token.
    pub color: String,
    /// Catalogue ordering position.
    pub position: i32,
}
