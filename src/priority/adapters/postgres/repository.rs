//! `PostgreSQL` registry implementation for priority reference data.

use super::{models::PriorityRow, schema::task_priorities};
use crate::priority::{
    domain::{Priority, PriorityId},
    ports::{PriorityRegistry, PriorityRegistryError, PriorityRegistryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by priority adapters.
pub type PriorityPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed priority registry.
#[derive(Debug, Clone)]
pub struct PostgresPriorityRegistry {
    pool: PriorityPgPool,
}

impl PostgresPriorityRegistry {
    /// Creates a new registry from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PriorityPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PriorityRegistryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PriorityRegistryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PriorityRegistryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PriorityRegistryError::persistence)?
    }
}

#[async_trait]
impl PriorityRegistry for PostgresPriorityRegistry {
    async fn find_by_id(&self, id: PriorityId) -> PriorityRegistryResult<Option<Priority>> {
        self.run_blocking(move |connection| {
            let row = task_priorities::table
                .filter(task_priorities::id.eq(id.value()))
                .select(PriorityRow::as_select())
                .first::<PriorityRow>(connection)
                .optional()
                .map_err(PriorityRegistryError::persistence)?;
            row.map(row_to_priority).transpose()
        })
        .await
    }

    async fn list_all(&self) -> PriorityRegistryResult<Vec<Priority>> {
        self.run_blocking(move |connection| {
            let rows = task_priorities::table
                .order((task_priorities::position.asc(), task_priorities::id.asc()))
                .select(PriorityRow::as_select())
                .load::<PriorityRow>(connection)
                .map_err(PriorityRegistryError::persistence)?;
            rows.into_iter().map(row_to_priority).collect()
        })
        .await
    }
}

fn row_to_priority(row: PriorityRow) -> PriorityRegistryResult<Priority> {
    let PriorityRow {
        id,
        label,
        color,
        position,
    } = row;

    Priority::from_parts(id, &label, &color, position)
        .map_err(PriorityRegistryError::invalid_persisted_data)
}
