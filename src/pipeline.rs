//! Load, swap, persist and reload, in that order.

use crate::error::StoreError;
use crate::seat::{swap_adjacent_ids, Seat};
use crate::store::SeatStore;
use tracing::info;

/// Read every seat in ascending `id` order.
pub async fn load(store: &dyn SeatStore) -> Result<Vec<Seat>, StoreError> {
    let seats = store.fetch_seats().await?;
    info!(count = seats.len(), "loaded seats");
    Ok(seats)
}

/// Sort `seats` by their current `id`, then write every student back in one transaction.
///
/// Rows are matched by the record's current `id`. After [`swap_adjacent_ids`]
/// that is the partner's original id, so each student lands on the partner's row.
pub async fn persist(store: &dyn SeatStore, seats: &mut [Seat]) -> Result<(), StoreError> {
    seats.sort_by_key(|seat| seat.id);
    store.update_students(seats).await?;
    info!(count = seats.len(), "persisted seats");
    Ok(())
}

/// Run the full sequence and return the state read back after the commit.
pub async fn run(store: &dyn SeatStore) -> Result<Vec<Seat>, StoreError> {
    let mut seats = load(store).await?;
    swap_adjacent_ids(&mut seats);
    persist(store, &mut seats).await?;
    load(store).await
}
