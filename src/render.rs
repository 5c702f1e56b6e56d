//! Renders editor state to the terminal.
//!
//! Every call to [`render`] repaints the entire screen.

use crate::cursor::{Cursor, to_coord};
use crate::state::State;
use crate::writer::Writer;

/// Paints `state` into `writer`, leaving the terminal cursor at the position of the
/// state's cursor.
pub fn render(state: &State, writer: &mut Writer) {
    writer
        .hide_cursor()
        .erase_display()
        .set_cursor(Cursor::ORIGIN);
    for (row, line) in state.buffer.lines().enumerate() {
        writer
            .set_cursor(Cursor::new(to_coord(row), 0))
            .write_str(line);
    }
    writer.set_cursor(state.cursor).show_cursor();
}
