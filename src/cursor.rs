//! Cursor positions.

use std::fmt::{self, Display, Formatter};

/// An edit position expressed as _row_ and _column_, both `0`-based.
///
/// A cursor carries no knowledge of the buffer it points into, so any derivation may
/// yield a position outside the bounds of that buffer, including negative
/// coordinates. Bringing the cursor back in range is the responsibility of
/// [`State::clamp`](crate::state::State::clamp).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Cursor {
    pub row: isize,
    pub col: isize,
}

impl Cursor {
    /// A cursor at (`0`, `0`).
    pub const ORIGIN: Cursor = Cursor::new(0, 0);

    pub const fn new(row: isize, col: isize) -> Cursor {
        Cursor { row, col }
    }

    pub fn up(self) -> Cursor {
        Cursor::new(self.row.saturating_sub(1), self.col)
    }

    pub fn down(self) -> Cursor {
        Cursor::new(self.row.saturating_add(1), self.col)
    }

    pub fn left(self) -> Cursor {
        Cursor::new(self.row, self.col.saturating_sub(1))
    }

    pub fn right(self) -> Cursor {
        Cursor::new(self.row, self.col.saturating_add(1))
    }

    pub fn at_row(self, row: isize) -> Cursor {
        Cursor::new(row, self.col)
    }

    pub fn at_col(self, col: isize) -> Cursor {
        Cursor::new(self.row, col)
    }

    /// Returns (_row_, _column_) as buffer indexes, where negative coordinates
    /// become `0`.
    pub fn position(self) -> (usize, usize) {
        (to_index(self.row), to_index(self.col))
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Returns `n` as an index, or `0` if negative.
pub fn to_index(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Returns `n` as a coordinate, or [`isize::MAX`] if too large.
pub fn to_coord(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
