//! Parsing of typed commands.

use derive_more::{Display, Error};
use tictactoe_engine::Position;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the active piece at a cell. Range is checked by the engine.
    Play {
        /// Row, 0-based.
        row: usize,
        /// Column, 0-based.
        col: usize,
    },
    /// Start over with the same players.
    NewGame,
    /// Print the board.
    ShowBoard,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Blank line.
    #[display("Nothing entered")]
    Empty,
    /// Square number outside 1-9.
    #[display("Square {number} is not between 1 and 9")]
    NoSuchSquare {
        /// The number typed.
        number: usize,
    },
    /// Anything else.
    #[display("Unrecognized input: {input}")]
    Unrecognized {
        /// The text typed.
        input: String,
    },
}

/// Lines printed for `help`.
pub const HELP: &str = "\
Commands:
  1-9          play the numbered square
  <row> <col>  play a cell by coordinates, 0-2 each
  center, top-left, ...
               play a square by name
  new          start a new game with the same players
  board        show the board
  help         show this message
  quit         leave";

/// Parses one line of input.
///
/// # Errors
///
/// Returns [`InputError`] for anything that is not a command.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "new" | "restart" => return Ok(Command::NewGame),
        "board" => return Ok(Command::ShowBoard),
        "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return match number.checked_sub(1).and_then(Position::from_index) {
            Some(pos) => Ok(Command::Play {
                row: pos.row(),
                col: pos.col(),
            }),
            None => Err(InputError::NoSuchSquare { number }),
        };
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return Ok(Command::Play { row, col });
    }

    Position::from_label(trimmed)
        .map(|pos| Command::Play {
            row: pos.row(),
            col: pos.col(),
        })
        .ok_or_else(|| InputError::Unrecognized {
            input: trimmed.to_string(),
        })
}
