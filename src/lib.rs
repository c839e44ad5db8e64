//! Swap student assignments between adjacent seats of a `seat` table.
//!
//! # Intention
//!
//! - Read every seat ordered by id, exchange ids pairwise `(1,2)`, `(3,4)`, ...,
//!   write the result back in one transaction and print the reloaded table.
//! - Keep each stage a plain function over an explicit [`store::SeatStore`]
//!   handle so it can run against an in-memory SQLite database.
//!
//! # Architectural Boundaries
//!
//! - SQL lives in [`store`] only.
//! - Process exit and logging setup belong to the binary, not the library.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod seat;
pub mod store;

pub use config::StoreConfig;
pub use error::{ConfigError, Error, Result, StoreError};
pub use seat::{swap_adjacent_ids, Seat, SeatId};
pub use store::SeatStore;

/// Open the configured store, swap adjacent seats and return the table as read back.
///
/// The store connection is closed before returning, whatever the outcome.
pub async fn swap_seats(config: &StoreConfig) -> Result<Vec<Seat>> {
    let store = store::open(config).await?;
    Ok(pipeline::run(store.as_ref()).await?)
}
