use crate::config::SqliteConfig;
use crate::error::StoreError;
use crate::seat::Seat;
use crate::store::SeatStore;
use async_trait::async_trait;
use futures::lock::Mutex;
use rusqlite::{params, Connection, OpenFlags};
use tracing::{debug, info, warn};

const SELECT_SEATS: &str = "SELECT id, student FROM seat ORDER BY id ASC";
const UPDATE_STUDENT: &str = "UPDATE seat SET student = ?1 WHERE id = ?2";

/// [`SeatStore`] over a single SQLite connection.
pub struct SqliteSeatStore {
    connection: Mutex<Connection>,
}

impl SqliteSeatStore {
    /// Wrap an already opened connection, e.g. an in-memory database seeded by a test.
    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    /// Open the database file at `config.db_path`. The file must already exist.
    pub fn open(config: &SqliteConfig) -> Result<Self, StoreError> {
        info!(path = %config.db_path.display(), "opening sqlite seat store");
        let connection = Connection::open_with_flags(
            &config.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self::new(connection))
    }
}

fn select_seats(conn: &Connection) -> rusqlite::Result<Vec<Seat>> {
    let mut stmt = conn.prepare(SELECT_SEATS)?;
    let rows = stmt.query_map([], |row| {
        Ok(Seat {
            id: row.get(0)?,
            student: row.get(1)?,
        })
    })?;
    rows.collect()
}

fn update_in_transaction(conn: &mut Connection, seats: &[Seat]) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    for seat in seats {
        debug!(id = seat.id, student = %seat.student, "updating seat");
        if let Err(err) = tx.execute(UPDATE_STUDENT, params![seat.student, seat.id]) {
            warn!(id = seat.id, error = %err, "update failed, rolling back");
            if let Err(rollback_err) = tx.rollback() {
                warn!(error = %rollback_err, "rollback failed");
            }
            return Err(StoreError::Update {
                id: seat.id,
                source: Box::new(err.into()),
            });
        }
    }
    tx.commit()?;
    Ok(())
}

#[async_trait]
impl SeatStore for SqliteSeatStore {
    async fn fetch_seats(&self) -> Result<Vec<Seat>, StoreError> {
        let conn = self.connection.lock().await;
        Ok(select_seats(&conn)?)
    }

    async fn update_students(&self, seats: &[Seat]) -> Result<(), StoreError> {
        let mut conn = self.connection.lock().await;
        update_in_transaction(&mut conn, seats)
    }
}
