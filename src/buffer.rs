//! Immutable line buffer.
//!
//! A [`Buffer`] is the entire document held as an ordered sequence of lines. Every
//! editing operation leaves the receiver untouched and returns a new buffer, so prior
//! buffers may be retained freely. Lines themselves are reference counted and shared
//! between a buffer and the buffers derived from it, so an edit copies the spine of
//! the sequence but only allocates the lines it actually changes.
//!
//! Columns are always expressed as character positions, never byte offsets.

use std::rc::Rc;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Buffer {
    lines: Rc<[Rc<str>]>,
}

impl Buffer {
    /// Separator placed between lines when a buffer is turned into text.
    pub const LINE_SEPARATOR: char = '\n';

    /// Creates a buffer containing a single empty line.
    pub fn new() -> Buffer {
        Buffer::from_lines([""])
    }

    /// Creates a buffer from `lines`, where an empty sequence yields a single empty
    /// line.
    pub fn from_lines<I, S>(lines: I) -> Buffer
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines
            .into_iter()
            .map(|line| Rc::from(line.as_ref()))
            .collect::<Vec<Rc<str>>>();
        if lines.is_empty() {
            lines.push(Rc::from(""));
        }
        Buffer {
            lines: lines.into(),
        }
    }

    /// Creates a buffer by splitting `text` on [`LINE_SEPARATOR`](Self::LINE_SEPARATOR),
    /// yielding one line per separated piece, including a trailing empty piece.
    pub fn from_text(text: &str) -> Buffer {
        Buffer::from_lines(text.split(Self::LINE_SEPARATOR))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the line at `row`, or an empty string if `row` is out of range.
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(|line| &**line).unwrap_or("")
    }

    /// Returns the number of characters in the line at `row`, or `0` if `row` is out
    /// of range.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).chars().count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| &**line)
    }

    /// Returns a buffer with `text` inserted into the line at `row` before the
    /// character at `col`.
    ///
    /// A `col` beyond the end of the line appends `text` to the line.
    pub fn insert(&self, row: usize, col: usize, text: &str) -> Buffer {
        let line = self.line(row);
        let (head, tail) = line.split_at(offset_of(line, col));
        self.splice(row, 1, [format!("{head}{text}{tail}")])
    }

    /// Returns a buffer with `count` characters removed from the line at `row`,
    /// starting with the character at `col`.
    ///
    /// Characters beyond the end of the line are silently ignored.
    pub fn delete(&self, row: usize, col: usize, count: usize) -> Buffer {
        let line = self.line(row);
        let start = offset_of(line, col);
        let end = offset_of(line, col.saturating_add(count));
        self.splice(row, 1, [format!("{}{}", &line[..start], &line[end..])])
    }

    /// Returns a buffer where the line following `row` is appended to the line at
    /// `row` and then removed.
    ///
    /// If `row` is the last line, the result is equivalent to the original buffer.
    pub fn join_rows(&self, row: usize) -> Buffer {
        let joined = format!("{}{}", self.line(row), self.line(row + 1));
        self.splice(row, 2, [joined])
    }

    /// Returns a buffer where the line at `row` is split at `col` into two
    /// consecutive lines.
    pub fn newline(&self, row: usize, col: usize) -> Buffer {
        let line = self.line(row);
        let (head, tail) = line.split_at(offset_of(line, col));
        self.splice(row, 1, [head.to_string(), tail.to_string()])
    }

    /// Returns the content of this buffer as text, with lines joined by
    /// [`LINE_SEPARATOR`](Self::LINE_SEPARATOR).
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (row, line) in self.lines().enumerate() {
            if row > 0 {
                text.push(Self::LINE_SEPARATOR);
            }
            text.push_str(line);
        }
        text
    }

    /// Returns a buffer where `remove` lines starting at `row` are replaced with
    /// `insert`.
    ///
    /// A `row` beyond the last line is treated as the end of the buffer, and `remove`
    /// is bounded by the number of lines available. Lines outside the affected range
    /// are shared with `self`.
    fn splice<I>(&self, row: usize, remove: usize, insert: I) -> Buffer
    where
        I: IntoIterator<Item = String>,
    {
        let start = row.min(self.lines.len());
        let end = start.saturating_add(remove).min(self.lines.len());
        let lines = self.lines[..start]
            .iter()
            .cloned()
            .chain(insert.into_iter().map(Rc::<str>::from))
            .chain(self.lines[end..].iter().cloned())
            .collect::<Vec<Rc<str>>>();
        Buffer {
            lines: lines.into(),
        }
    }
}

/// Returns the byte offset in `line` of the `col`-th character, or `line.len()` if
/// `line` contains fewer than `col` characters.
fn offset_of(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}
