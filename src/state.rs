//! Editor state.

use crate::buffer::Buffer;
use crate::cursor::{self, Cursor};

/// The pair of [`Buffer`] and [`Cursor`] threaded through the editing loop.
///
/// A state is never modified in place. Every key produces a new state, which is
/// passed through [`clamp`](Self::clamp) before it is rendered or persisted.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct State {
    pub buffer: Buffer,
    pub cursor: Cursor,
}

impl State {
    pub fn new(buffer: Buffer, cursor: Cursor) -> State {
        State { buffer, cursor }
    }

    /// Creates a state with a single empty line and the cursor at the origin.
    pub fn blank() -> State {
        State::new(Buffer::new(), Cursor::ORIGIN)
    }

    /// Returns a state whose cursor is bounded by the buffer.
    ///
    /// The row is bounded by the number of lines and the column by the length of the
    /// line at the row _before_ it was bounded, so a cursor that strays above the
    /// first line or below the last line comes to rest at column `0`. The cursor may
    /// rest one position past the last character of a line.
    pub fn clamp(&self) -> State {
        let last_row = cursor::to_coord(self.buffer.line_count().saturating_sub(1));
        let row = self.cursor.row.clamp(0, last_row);
        let col = self.cursor.col.clamp(0, self.line_len(self.cursor.row));
        State::new(self.buffer.clone(), self.cursor.at_row(row).at_col(col))
    }

    /// Returns `true` if the cursor lies within the bounds of the buffer.
    pub fn is_bounded(&self) -> bool {
        let Cursor { row, col } = self.cursor;
        row >= 0
            && cursor::to_index(row) < self.buffer.line_count()
            && col >= 0
            && col <= self.line_len(row)
    }

    /// Returns the length of the line at `row`, or `0` if `row` is out of range.
    fn line_len(&self, row: isize) -> isize {
        usize::try_from(row)
            .map(|row| cursor::to_coord(self.buffer.line_len(row)))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(lines: &[&str], row: isize, col: isize) -> State {
        State::new(Buffer::from_lines(lines), Cursor::new(row, col))
    }

    #[test]
    fn blank_state() {
        let s = State::blank();
        assert_eq!(s.buffer.line_count(), 1);
        assert_eq!(s.cursor, Cursor::ORIGIN);
        assert!(s.is_bounded());
    }

    #[test]
    fn clamp_within_bounds_is_unchanged() {
        let s = state(&["hello", "hi"], 1, 2);
        assert_eq!(s.clamp(), s);
        let s = state(&["hello"], 0, 5);
        assert_eq!(s.clamp(), s);
    }

    #[test]
    fn clamp_row_beyond_last_line() {
        let s = state(&["hello", "hi"], 9, 1).clamp();
        assert_eq!(s.cursor.row, 1);
    }

    #[test]
    fn clamp_row_beyond_last_line_rests_at_start() {
        let s = state(&["hello", "hi"], 2, 2).clamp();
        assert_eq!(s.cursor, Cursor::new(1, 0));
    }

    #[test]
    fn clamp_row_above_first_line_rests_at_start() {
        let s = state(&["hello", "hi"], -1, 3).clamp();
        assert_eq!(s.cursor, Cursor::new(0, 0));
    }

    #[test]
    fn clamp_negative_col() {
        let s = state(&["hello"], 0, -1).clamp();
        assert_eq!(s.cursor, Cursor::new(0, 0));
        assert!(!state(&["hello"], 0, -1).is_bounded());
    }

    #[test]
    fn clamp_col_beyond_end_of_line() {
        let s = state(&["hello", "hi"], 0, 99).clamp();
        assert_eq!(s.cursor, Cursor::new(0, 5));
    }

    #[test]
    fn clamp_is_idempotent() {
        let lines = ["", "añb", "longer line"];
        for row in -2..5 {
            for col in -2..15 {
                let once = state(&lines, row, col).clamp();
                assert!(once.is_bounded());
                assert_eq!(once.clamp(), once);
            }
        }
    }
}
