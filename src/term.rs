//! Terminal initialization.
//!
//! This module provides functions to put the terminal in raw mode such that
//! keystrokes can be read byte by byte, and to restore its original configuration.

use crate::error::{Error, Result};
use libc::{STDIN_FILENO, TCSADRAIN, VMIN, VTIME, c_int, termios};
use std::mem::MaybeUninit;
use std::sync::OnceLock;

/// Puts the terminal into raw mode.
///
/// The terminal mode is changed such that raw bytes are read from standard input
/// without buffering or echo, and control bytes such as `C-c` and `C-s` are delivered
/// as input rather than interpreted by the driver. Reads do not block indefinitely
/// when no bytes are available. Instead, the underlying driver waits `1/10` second
/// before returning with nothing.
pub fn init() -> Result<()> {
    default_term().and_then(|mut term| unsafe {
        libc::cfmakeraw(&mut term);
        term.c_cc[VMIN] = 0;
        term.c_cc[VTIME] = 1;
        check_err(libc::tcsetattr(STDIN_FILENO, TCSADRAIN, &term))
    })
}

/// Restores the terminal to its original configuration.
pub fn restore() -> Result<()> {
    default_term()
        .and_then(|term| unsafe { check_err(libc::tcsetattr(STDIN_FILENO, TCSADRAIN, &term)) })
}

fn check_err(err: c_int) -> Result<()> {
    if err < 0 { Err(Error::os()) } else { Ok(()) }
}

/// Ensures that default terminal configuration is captured at most once.
static DEFAULT_TERM: OnceLock<Result<termios>> = OnceLock::new();

/// Returns the default terminal configuration that can be used for restoring after
/// changing into raw mode.
fn default_term() -> Result<termios> {
    let def_term = DEFAULT_TERM.get_or_init(|| {
        let term = unsafe {
            let mut term = MaybeUninit::<termios>::uninit();
            check_err(libc::tcgetattr(STDIN_FILENO, term.as_mut_ptr()))?;
            term.assume_init()
        };
        Ok(term)
    });
    match def_term {
        Ok(term) => Ok(*term),
        Err(Error::Os { cause }) => Err(Error::os_cloning(cause)),
        Err(e) => Err(Error::os_cloning(&std::io::Error::other(e.to_string()))),
    }
}
