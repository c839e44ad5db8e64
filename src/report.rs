use crate::seat::Seat;

const BORDER: &str = "+--------+------------------+";
const ID_WIDTH: usize = 6;
const STUDENT_WIDTH: usize = 16;

/// Render seats as a bordered two-column table, one row per seat in input order.
///
/// Cells are padded to the border width; longer values widen their own row
/// rather than being cut.
pub fn render(seats: &[Seat]) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    push_row(&mut out, "id", "student");
    out.push_str(BORDER);
    out.push('\n');
    for seat in seats {
        push_row(&mut out, seat.id, &seat.student);
    }
    out.push_str(BORDER);
    out.push('\n');
    out
}

fn push_row(out: &mut String, id: impl std::fmt::Display, student: &str) {
    out.push_str(&format!(
        "| {:<id_w$} | {:<st_w$} |\n",
        id.to_string(),
        student,
        id_w = ID_WIDTH,
        st_w = STUDENT_WIDTH
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_rows_and_borders() {
        let table = render(&[Seat::new(1, "Bob"), Seat::new(2, "Alice")]);
        assert_eq!(
            table,
            "+--------+------------------+\n\
             | id     | student          |\n\
             +--------+------------------+\n\
             | 1      | Bob              |\n\
             | 2      | Alice            |\n\
             +--------+------------------+\n"
        );
    }

    #[test]
    fn empty_input_renders_frame_only() {
        let table = render(&[]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().all(|line| line.len() == BORDER.len()));
    }

    #[test]
    fn long_values_are_not_truncated() {
        let name = "Maximiliana Wolfeschlegel";
        let table = render(&[Seat::new(-1234567, name)]);
        let row = table.lines().nth(3).unwrap();
        assert_eq!(row, format!("| -1234567 | {name} |"));
    }
}
