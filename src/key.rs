//! Keyboard reader.

use crate::error::Result;
use std::io::{self, Bytes, Read, Stdin};
use std::str::from_utf8;

/// The set of input tokens produced by a [`Keyboard`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Key {
    /// A control byte in the range `0x00..=0x1F`, including a lone or unrecognized
    /// `ESC`.
    Control(u8),

    /// A character to be taken literally.
    Char(char),

    Up,
    Down,
    Right,
    Left,
}

/// A keyboard that reads bytes from the terminal and produces corresponding [`Key`]s.
pub struct Keyboard<R: Read = Stdin> {
    term: Bytes<R>,
}

/// Byte that introduces an escape sequence.
const ESC: u8 = 0x1b;

impl Keyboard {
    /// Creates a keyboard reading from standard input.
    pub fn new() -> Keyboard {
        Keyboard::from_reader(io::stdin())
    }
}

impl<R: Read> Keyboard<R> {
    /// Creates a keyboard reading from `reader`.
    pub fn from_reader(reader: R) -> Keyboard<R> {
        Keyboard {
            term: reader.bytes(),
        }
    }

    fn next(&mut self) -> Result<Option<u8>> {
        Ok(self.term.next().transpose()?)
    }

    /// Reads the next key.
    ///
    /// Reads one or more bytes from the underlying terminal and returns the
    /// corresponding [`Key`]. In raw mode the terminal driver returns nothing after
    /// waiting `1/10` second, in which case `None` is returned, as it is for a
    /// malformed `UTF-8` sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if an I/O error occurred while reading bytes from the
    /// underlying terminal.
    pub fn read(&mut self) -> Result<Option<Key>> {
        let key = match self.next()? {
            Some(ESC) => Some(self.read_escape()?),
            Some(b @ 0x00..=0x1f) => Some(Key::Control(b)),
            Some(b @ 0x20..=0x7f) => Some(Key::Char(b as char)),
            Some(b) => self.read_unicode(b)?,
            None => None,
        };
        Ok(key)
    }

    /// Reads a sequence of bytes prefixed with `ESC`.
    ///
    /// Only cursor keys are recognized, in both normal (`ESC [`) and application
    /// (`ESC O`) modes. Anything else, including a lone `ESC`, yields
    /// [`Key::Control`] of `ESC` once the sequence has been consumed.
    fn read_escape(&mut self) -> Result<Key> {
        let key = match self.next()? {
            Some(b'[') => self.read_csi()?,
            Some(b'O') => match self.next()? {
                Some(b) => map_cursor(b, false),
                None => Key::Control(ESC),
            },
            _ => Key::Control(ESC),
        };
        Ok(key)
    }

    /// Reads the remainder of a sequence prefixed with `ESC [` through its final
    /// byte, which falls in the range `0x40..=0x7E`.
    fn read_csi(&mut self) -> Result<Key> {
        let mut params = false;
        loop {
            match self.next()? {
                Some(b @ 0x40..=0x7e) => return Ok(map_cursor(b, params)),
                Some(_) => params = true,
                None => return Ok(Key::Control(ESC)),
            }
        }
    }

    /// Reads a `UTF-8` sequence of bytes where `b` is the first byte.
    ///
    /// `UTF-8` encoding is strictly limited to 2-4 bytes, so anything outside this
    /// range is considered malformed.
    fn read_unicode(&mut self, b: u8) -> Result<Option<Key>> {
        let n = b.leading_ones() as usize;
        if n < 2 || n > 4 {
            return Ok(None);
        }
        let mut buf = [0; 4];
        buf[0] = b;
        for i in 1..n {
            match self.next()? {
                Some(b) => buf[i] = b,
                None => return Ok(None),
            }
        }
        let key = from_utf8(&buf[..n])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Key::Char);
        Ok(key)
    }
}

/// Returns the cursor key denoted by the final byte `b` of an escape sequence, or
/// [`Key::Control`] of `ESC` if unrecognized or if the sequence carried parameters.
fn map_cursor(b: u8, params: bool) -> Key {
    match (b, params) {
        (b'A', false) => Key::Up,
        (b'B', false) => Key::Down,
        (b'C', false) => Key::Right,
        (b'D', false) => Key::Left,
        _ => Key::Control(ESC),
    }
}
