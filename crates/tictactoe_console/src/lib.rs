//! Terminal front end for the tic-tac-toe engine.
//!
//! - **Cli**: flags mapped onto a [`GameConfig`](tictactoe_engine::GameConfig)
//! - **Input**: typed commands (`5`, `1 2`, `center`, `new`, ...)
//! - **Console**: a [`Presentation`](tictactoe_engine::Presentation) drawing the
//!   board and a rolling message log, or streaming JSON events

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;

pub use cli::Cli;
pub use console::{ConsolePresenter, LOG_CAPACITY, MessageLog, OutputMode};
pub use input::{Command, HELP, InputError, parse_command};
