//! Main controller.
use crate::command::Classifier;
use crate::config::Settings;
use crate::error::Result;
use crate::io;
use crate::key::{Key, Keyboard};
use crate::reduce::{self, Action};
use crate::render;
use crate::state::State;
use crate::writer::Writer;

use std::io::{Read, Write};
use std::path::PathBuf;

/// The primary control point for coordinating user interaction and editing operations.
///
/// A controller owns the only [`State`] of the editor, replacing it with a new state
/// for each [`Key`] read from the keyboard, and carries out the side effects requested
/// by [`reduce`](reduce::reduce).
pub struct Controller<R: Read, W: Write> {
    keyboard: Keyboard<R>,
    classifier: Classifier,
    settings: Settings,
    path: Option<PathBuf>,
    state: State,
    writer: Writer,
    out: W,
}

impl<R: Read, W: Write> Controller<R, W> {
    /// Creates a controller that edits `state`, reading keys from `keyboard` and
    /// painting to `out`.
    ///
    /// Saving is enabled only if `path` is given, in which case the buffer is always
    /// written to that path.
    pub fn new(
        keyboard: Keyboard<R>,
        out: W,
        settings: Settings,
        state: State,
        path: Option<PathBuf>,
    ) -> Controller<R, W> {
        Controller {
            keyboard,
            classifier: Classifier::new(path.is_some()),
            settings,
            path,
            state: state.clamp(),
            writer: Writer::new(),
            out,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Runs the main processing loop.
    ///
    /// This loop paints the initial state, then reads [keys](Key) one at a time,
    /// repainting after each, until instructed to quit.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if reading keys, writing to the terminal, or saving the buffer
    /// fails. None of these are recoverable, so the loop ends.
    pub fn run(&mut self) -> Result<()> {
        self.paint()?;
        loop {
            if let Some(key) = self.keyboard.read()? {
                if !self.process(&key)? {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Processes `key`, returning `false` if editing should stop.
    pub fn process(&mut self, key: &Key) -> Result<bool> {
        let command = self.classifier.classify(key);
        match reduce::reduce(&self.state, command) {
            Action::Continue(next) => {
                self.state = next.clamp();
            }
            Action::Save(next) => {
                if let Some(path) = &self.path {
                    io::write_file(path, &next.buffer)?;
                }
                self.state = next.clamp();
            }
            Action::Quit => {
                if self.settings.clear_on_exit {
                    self.writer.erase_display();
                }
                self.writer.send(&mut self.out)?;
                return Ok(false);
            }
        }
        self.paint()?;
        Ok(true)
    }

    fn paint(&mut self) -> Result<()> {
        debug_assert!(
            self.state.is_bounded(),
            "{}: cursor out of bounds",
            self.state.cursor
        );
        render::render(&self.state, &mut self.writer);
        self.writer.send(&mut self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::cursor::Cursor;
    use std::fs;
    use tempfile::TempDir;

    type TestController = Controller<std::io::Cursor<Vec<u8>>, Vec<u8>>;

    fn controller(bytes: &[u8], state: State, path: Option<PathBuf>) -> TestController {
        Controller::new(
            Keyboard::from_reader(std::io::Cursor::new(bytes.to_vec())),
            Vec::new(),
            Settings::default(),
            state,
            path,
        )
    }

    #[test]
    fn run_until_interrupted() {
        let mut c = controller(b"ab\rc\x03ignored", State::blank(), None);
        c.run().unwrap();
        assert_eq!(
            c.state().buffer.lines().collect::<Vec<_>>(),
            vec!["ab", "c"]
        );
        assert_eq!(c.state().cursor, Cursor::new(1, 1));
        assert!(c.out.ends_with(b"\x1b[2J"));
    }

    #[test]
    fn interrupt_without_clearing() {
        let mut c = controller(b"", State::blank(), None);
        c.settings.clear_on_exit = false;
        assert!(!c.process(&Key::Control(0x03)).unwrap());
        assert!(c.out.is_empty());
    }

    #[test]
    fn initial_state_is_clamped() {
        let state = State::new(Buffer::from_lines(["abc"]), Cursor::new(0, 9));
        let c = controller(b"", state, None);
        assert_eq!(c.state().cursor, Cursor::new(0, 3));
    }

    #[test]
    fn every_key_repaints() {
        let mut c = controller(b"", State::blank(), None);
        assert!(c.process(&Key::Char('x')).unwrap());
        assert!(c.process(&Key::Left).unwrap());
        let painted = String::from_utf8(c.out.clone()).unwrap();
        assert_eq!(painted.matches("\x1b[2J").count(), 2);
        assert!(painted.ends_with("\x1b[1;1H\x1b[?25h"));
    }

    #[test]
    fn save_writes_file_and_keeps_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "x\ny").unwrap();

        let state = State::new(io::read_file(&path).unwrap(), Cursor::ORIGIN);
        let mut c = controller(b"", state.clone(), Some(path.clone()));
        assert!(c.process(&Key::Control(0x13)).unwrap());
        assert_eq!(c.state(), &state);
        assert_eq!(fs::read(&path).unwrap(), b"x\ny");

        assert!(c.process(&Key::Char('!')).unwrap());
        assert!(c.process(&Key::Control(0x13)).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "!x\ny");
    }

    #[test]
    fn save_disabled_without_path() {
        let mut c = controller(b"", State::blank(), None);
        assert!(c.process(&Key::Control(0x13)).unwrap());
        assert_eq!(c.state().buffer.line(0), "^S");
        assert_eq!(c.state().cursor, Cursor::new(0, 2));
    }

    #[test]
    fn save_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone").join("doc.txt");
        let mut c = controller(b"", State::blank(), Some(path));
        assert!(c.process(&Key::Control(0x13)).is_err());
    }
}
