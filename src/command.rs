//! Classification of keys into editing commands.
//!
//! A [`Classifier`] is total over [`Key`]: every key maps to exactly one
//! [`Command`]. Cursor keys and their control-byte counterparts are normalized to the
//! same command, so the reducer never sees how a command was typed.

use crate::key::Key;

/// The set of editing commands.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Interrupt,
    MoveStart,
    MoveEnd,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Backspace,
    Newline,
    Save,
    Insert(String),
}

// Control bytes bound to commands.
const CTRL_A: u8 = 0x01;
const CTRL_B: u8 = 0x02;
const CTRL_C: u8 = 0x03;
const CTRL_E: u8 = 0x05;
const CTRL_F: u8 = 0x06;
const CTRL_H: u8 = 0x08;
const CTRL_M: u8 = 0x0d;
const CTRL_N: u8 = 0x0e;
const CTRL_P: u8 = 0x10;
const CTRL_S: u8 = 0x13;

/// Maps [`Key`]s to [`Command`]s.
pub struct Classifier {
    save_enabled: bool,
}

impl Classifier {
    /// Creates a classifier, where `save_enabled` determines whether `C-s` is
    /// recognized as [`Command::Save`] or treated as any other unbound control byte.
    pub fn new(save_enabled: bool) -> Classifier {
        Classifier { save_enabled }
    }

    pub fn classify(&self, key: &Key) -> Command {
        match key {
            Key::Control(CTRL_A) => Command::MoveStart,
            Key::Control(CTRL_B) | Key::Left => Command::MoveLeft,
            Key::Control(CTRL_C) => Command::Interrupt,
            Key::Control(CTRL_E) => Command::MoveEnd,
            Key::Control(CTRL_F) | Key::Right => Command::MoveRight,
            Key::Control(CTRL_H) => Command::Backspace,
            Key::Control(CTRL_M) => Command::Newline,
            Key::Control(CTRL_N) | Key::Down => Command::MoveDown,
            Key::Control(CTRL_P) | Key::Up => Command::MoveUp,
            Key::Control(CTRL_S) if self.save_enabled => Command::Save,
            Key::Control(b) => Command::Insert(caret_name(*b)),
            Key::Char(c) => Command::Insert(c.to_string()),
        }
    }
}

/// Returns the caret notation of the control byte `b`, such as `^D` for `0x04`.
fn caret_name(b: u8) -> String {
    let c = char::from((b & 0x1f) + b'@');
    format!("^{c}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bound_control_bytes() {
        let classifier = Classifier::new(true);
        let expect = [
            (0x01, Command::MoveStart),
            (0x02, Command::MoveLeft),
            (0x03, Command::Interrupt),
            (0x05, Command::MoveEnd),
            (0x06, Command::MoveRight),
            (0x08, Command::Backspace),
            (0x0d, Command::Newline),
            (0x0e, Command::MoveDown),
            (0x10, Command::MoveUp),
            (0x13, Command::Save),
        ];
        for (b, command) in expect {
            assert_eq!(classifier.classify(&Key::Control(b)), command);
        }
    }

    #[test]
    fn cursor_keys_alias_control_bytes() {
        let classifier = Classifier::new(false);
        let aliases = [
            (Key::Left, 0x02),
            (Key::Right, 0x06),
            (Key::Down, 0x0e),
            (Key::Up, 0x10),
        ];
        for (key, b) in aliases {
            assert_eq!(
                classifier.classify(&key),
                classifier.classify(&Key::Control(b))
            );
        }
    }

    #[test]
    fn classify_unbound_control_bytes_as_caret() {
        let classifier = Classifier::new(true);
        assert_eq!(
            classifier.classify(&Key::Control(0x04)),
            Command::Insert("^D".to_string())
        );
        assert_eq!(
            classifier.classify(&Key::Control(0x00)),
            Command::Insert("^@".to_string())
        );
        assert_eq!(
            classifier.classify(&Key::Control(0x1b)),
            Command::Insert("^[".to_string())
        );
        assert_eq!(
            classifier.classify(&Key::Control(0x1f)),
            Command::Insert("^_".to_string())
        );
    }

    #[test]
    fn save_requires_enabling() {
        let classifier = Classifier::new(false);
        assert_eq!(
            classifier.classify(&Key::Control(0x13)),
            Command::Insert("^S".to_string())
        );
    }

    #[test]
    fn classify_chars_literally() {
        let classifier = Classifier::new(false);
        assert_eq!(
            classifier.classify(&Key::Char('x')),
            Command::Insert("x".to_string())
        );
        assert_eq!(
            classifier.classify(&Key::Char('ß')),
            Command::Insert("ß".to_string())
        );
    }
}
