//! A buffered abstraction over terminal output that accumulates content and sends
//! it in a single write.

use crate::ansi;
use crate::cursor::Cursor;
use crate::error::Result;
use std::io::Write;

pub struct Writer {
    out: String,
}

impl Writer {
    pub fn new() -> Writer {
        Writer { out: String::new() }
    }

    /// Returns the content buffered since the last [`send`](Self::send).
    #[cfg(test)]
    pub fn pending(&self) -> &str {
        &self.out
    }

    /// Sends buffered content to `out` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if writing to or flushing `out` fails, in which case buffered
    /// content is discarded.
    pub fn send<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.out.len() > 0 {
            let result = out.write_all(self.out.as_bytes()).and_then(|_| out.flush());
            self.out.clear();
            result?;
        }
        Ok(())
    }

    pub fn erase_display(&mut self) -> &mut Writer {
        self.out.push_str(ansi::erase_display());
        self
    }

    /// Moves the terminal cursor to `cursor`, where negative coordinates become `0`.
    pub fn set_cursor(&mut self, cursor: Cursor) -> &mut Writer {
        let (row, col) = cursor.position();
        self.out.push_str(ansi::set_cursor(row, col).as_str());
        self
    }

    pub fn show_cursor(&mut self) -> &mut Writer {
        self.out.push_str(ansi::show_cursor());
        self
    }

    pub fn hide_cursor(&mut self) -> &mut Writer {
        self.out.push_str(ansi::hide_cursor());
        self
    }

    pub fn write_str(&mut self, text: &str) -> &mut Writer {
        self.out.push_str(text);
        self
    }
}
