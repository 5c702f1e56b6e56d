//! State reduction.
//!
//! [`reduce`] is the pure transition from a [`State`] and a [`Command`] to the next
//! [`Action`]. It performs no I/O and no bounds checking; the caller is expected to
//! [clamp](State::clamp) the resulting state and carry out any side effect the action
//! asks for.

use crate::command::Command;
use crate::cursor::to_coord;
use crate::state::State;

/// The outcome of reducing a [`Command`], carried out by the controller.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Action {
    /// Continue editing with the given state.
    Continue(State),

    /// Persist the buffer of the given state, then continue editing with it.
    Save(State),

    /// Stop editing.
    Quit,
}

pub fn reduce(state: &State, command: Command) -> Action {
    let State { buffer, cursor } = state;
    let (row, col) = cursor.position();
    let next = match command {
        Command::Interrupt => return Action::Quit,
        Command::Save => return Action::Save(state.clone()),
        Command::MoveStart => State::new(buffer.clone(), cursor.at_col(0)),
        Command::MoveEnd => {
            let len = to_coord(buffer.line_len(row));
            State::new(buffer.clone(), cursor.at_col(len))
        }
        Command::MoveLeft => State::new(buffer.clone(), cursor.left()),
        Command::MoveRight => State::new(buffer.clone(), cursor.right()),
        Command::MoveUp => State::new(buffer.clone(), cursor.up()),
        Command::MoveDown => State::new(buffer.clone(), cursor.down()),
        Command::Backspace => {
            if col == 0 && row > 0 {
                let prev_len = to_coord(buffer.line_len(row - 1));
                State::new(buffer.join_rows(row - 1), cursor.up().at_col(prev_len))
            } else if col > 0 {
                State::new(buffer.delete(row, col - 1, 1), cursor.left())
            } else {
                state.clone()
            }
        }
        Command::Newline => State::new(buffer.newline(row, col), cursor.down().at_col(0)),
        Command::Insert(text) => {
            let n = to_coord(text.chars().count());
            State::new(
                buffer.insert(row, col, &text),
                cursor.at_col(cursor.col.saturating_add(n)),
            )
        }
    };
    Action::Continue(next)
}
