//! Error types shared by the seat store, the configuration layer and the pipeline.

use crate::seat::SeatId;

/// Failures talking to the seat store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// An `UPDATE` inside the persist transaction failed; the transaction was rolled back.
    #[error("updating seat {id} failed, transaction rolled back")]
    Update {
        id: SeatId,
        #[source]
        source: Box<StoreError>,
    },
}

/// Failures before any row is read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("could not load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("could not reach the seat store")]
    Unreachable(#[source] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
