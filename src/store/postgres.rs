use crate::config::PostgresConfig;
use crate::error::StoreError;
use crate::seat::Seat;
use crate::store::SeatStore;
use async_trait::async_trait;
use futures::lock::Mutex;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error, info, warn};

const SELECT_SEATS: &str = "SELECT id, student FROM seat ORDER BY id ASC";
const UPDATE_STUDENT: &str = "UPDATE seat SET student = $1 WHERE id = $2";

/// [`SeatStore`] over a single PostgreSQL connection without TLS.
pub struct PostgresSeatStore {
    client: Mutex<Client>,
}

impl PostgresSeatStore {
    /// Connect and spawn the connection driver on the current runtime.
    ///
    /// The driver task ends once the store, and with it the client, is dropped.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StoreError> {
        info!(target_db = %config, "connecting to postgres seat store");
        let (client, connection) = config.to_pg_config().connect(NoTls).await?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!(error = %err, "postgres connection closed with error");
            }
        });
        Ok(Self {
            client: Mutex::new(client),
        })
    }
}

#[async_trait]
impl SeatStore for PostgresSeatStore {
    async fn fetch_seats(&self) -> Result<Vec<Seat>, StoreError> {
        let client = self.client.lock().await;
        let rows = client.query(SELECT_SEATS, &[]).await?;
        let mut seats = Vec::with_capacity(rows.len());
        for row in rows {
            seats.push(Seat {
                id: row.try_get(0)?,
                student: row.try_get(1)?,
            });
        }
        Ok(seats)
    }

    async fn update_students(&self, seats: &[Seat]) -> Result<(), StoreError> {
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;
        for seat in seats {
            debug!(id = seat.id, student = %seat.student, "updating seat");
            if let Err(err) = tx.execute(UPDATE_STUDENT, &[&seat.student, &seat.id]).await {
                warn!(id = seat.id, error = %err, "update failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                return Err(StoreError::Update {
                    id: seat.id,
                    source: Box::new(err.into()),
                });
            }
        }
        tx.commit().await?;
        Ok(())
    }
}
