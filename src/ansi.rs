//! A collection of functions that produce ANSI control sequences used in the
//! rendering of terminal output.
//!
//! Of particular note, ANSI sequences related to cursor positioning are `1`-based,
//! so functions in this module that accept *row* and *column* are presumed to be
//! `0`-based and silently add `1` to values.

pub fn erase_display() -> &'static str {
    "\x1b[2J"
}

pub fn show_cursor() -> &'static str {
    "\x1b[?25h"
}

pub fn hide_cursor() -> &'static str {
    "\x1b[?25l"
}

pub fn alt_screen(on: bool) -> &'static str {
    if on { "\x1b[?1049h" } else { "\x1b[?1049l" }
}

pub fn set_cursor(row: usize, col: usize) -> String {
    format!("\x1b[{};{}H", row + 1, col + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_position_is_one_based() {
        assert_eq!(set_cursor(0, 0), "\x1b[1;1H");
        assert_eq!(set_cursor(4, 11), "\x1b[5;12H");
    }
}
