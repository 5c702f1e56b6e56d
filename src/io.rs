//! I/O operations with buffers.

use crate::buffer::Buffer;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::from_utf8;

// Suggested capacity of internal buffers for readers and writers.
const BUFFER_SIZE: usize = 65_536;

/// Reads the file at `path` into a buffer with one line per line of the file.
///
/// # Errors
///
/// Returns [`Err`] if the file cannot be opened or read, or if its content is not
/// valid `UTF-8`.
pub fn read_file<P>(path: P) -> Result<Buffer>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::io(&name, e))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&name, e))?;
    let text = from_utf8(&bytes).map_err(|e| Error::utf8(&name, e))?;
    Ok(Buffer::from_text(text))
}

/// Writes `buf` to the file at `path`, replacing its content entirely, and returns
/// the number of bytes written.
///
/// Lines are joined with [`Buffer::LINE_SEPARATOR`] and no trailing separator is
/// added.
///
/// # Errors
///
/// Returns [`Err`] if the file cannot be created or written.
pub fn write_file<P>(path: P, buf: &Buffer) -> Result<usize>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::io(&name, e))?;
    let mut writer = BufWriter::with_capacity(BUFFER_SIZE, file);
    let text = buf.to_text();
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(&name, e))?;
    Ok(text.len())
}
