/// Integer label of a seat row.
pub type SeatId = i32;

/// One row of the `seat` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub student: String,
}

impl Seat {
    pub fn new(id: SeatId, student: impl Into<String>) -> Self {
        Self {
            id,
            student: student.into(),
        }
    }
}

/// Exchange `id` between each adjacent pair `(0, 1)`, `(2, 3)`, ...
///
/// Students stay on their record and a trailing unpaired seat is left alone.
/// Applying it twice restores the input.
pub fn swap_adjacent_ids(seats: &mut [Seat]) {
    for pair in seats.chunks_exact_mut(2) {
        let (left, right) = pair.split_at_mut(1);
        std::mem::swap(&mut left[0].id, &mut right[0].id);
    }
}
