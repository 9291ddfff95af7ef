//! Tic-tac-toe console.
//!
//! Reads commands from stdin, one per line, and shows the game on stdout.
//! Logs go to stderr; set `RUST_LOG=debug` to watch the engine work.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Stdout};
use tictactoe_console::{Cli, Command, ConsolePresenter, HELP, OutputMode, parse_command};
use tictactoe_engine::{GameEngine, GamePhase, MoveOutcome, RngSource};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type Engine = GameEngine<ConsolePresenter<Stdout>, RngSource>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let random = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let config = cli.game_config();
    info!(?config, seed = ?cli.seed, "Starting console");

    let mut engine = GameEngine::with_random(ConsolePresenter::new(io::stdout(), mode), random);
    engine.start(&config);
    if mode == OutputMode::Text {
        engine.presentation_mut().notice(HELP)?;
    }
    refresh(&mut engine)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        debug!(%line, "Read input");

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::NewGame) => engine.start(&config),
            Ok(Command::ShowBoard) => {
                let board = engine.board().clone();
                engine.presentation_mut().show_board(&board)?;
                continue;
            }
            Ok(Command::Help) => {
                engine.presentation_mut().notice(HELP)?;
                continue;
            }
            Ok(Command::Play { row, col }) => match engine.attempt_move(row, col) {
                Ok(MoveOutcome::Ignored) => {
                    let hint = if engine.phase() == GamePhase::Finished {
                        "The game is over. Type 'new' to play again."
                    } else {
                        "That square is taken."
                    };
                    engine.presentation_mut().notice(hint)?;
                }
                Ok(_) => {}
                Err(error) => engine.presentation_mut().notice(&error.to_string())?,
            },
            Err(error) => {
                let hint = format!("{error}. Type 'help' for commands.");
                engine.presentation_mut().notice(&hint)?;
                continue;
            }
        }

        refresh(&mut engine)?;
    }

    info!("Console closed");
    Ok(())
}

/// Redraws the board and log after an action.
fn refresh(engine: &mut Engine) -> Result<()> {
    let board = engine.board().clone();
    engine.presentation_mut().render(&board)?;
    Ok(())
}
