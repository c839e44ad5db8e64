//! Seat store backends.
//!
//! # Intention
//!
//! - Hide the SQL engine behind [`SeatStore`] so the pipeline can run against
//!   PostgreSQL in production and SQLite in tests.
//! - Each backend owns exactly one connection for its whole lifetime.
//!
//! # Architectural Boundaries
//!
//! - Only the two statements on the `seat` table live here.
//! - No ordering, swapping or formatting logic.

use crate::config::StoreConfig;
use crate::error::{ConfigError, StoreError};
use crate::seat::Seat;
use async_trait::async_trait;

pub mod postgres;
pub mod sqlite;

pub use postgres::PostgresSeatStore;
pub use sqlite::SqliteSeatStore;

/// Access to the `seat` table.
#[async_trait]
pub trait SeatStore: Send + Sync {
    /// Every row, ordered by `id` ascending.
    async fn fetch_seats(&self) -> Result<Vec<Seat>, StoreError>;

    /// Set `student` on the row matching each seat's `id`, in slice order,
    /// inside one transaction. Either every update commits or none does.
    async fn update_students(&self, seats: &[Seat]) -> Result<(), StoreError>;
}

/// Open the backend named by `config`.
pub async fn open(config: &StoreConfig) -> Result<Box<dyn SeatStore>, ConfigError> {
    let store: Box<dyn SeatStore> = match config {
        StoreConfig::Postgres(pg) => Box::new(
            PostgresSeatStore::connect(pg)
                .await
                .map_err(ConfigError::Unreachable)?,
        ),
        StoreConfig::Sqlite(lite) => {
            Box::new(SqliteSeatStore::open(lite).map_err(ConfigError::Unreachable)?)
        }
    };
    Ok(store)
}
