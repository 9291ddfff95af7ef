//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use tictactoe_engine::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameConfig};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of player one
    #[arg(long, default_value = DEFAULT_PLAYER_ONE)]
    pub player_one: String,

    /// Name of player two
    #[arg(long, default_value = DEFAULT_PLAYER_TWO)]
    pub player_two: String,

    /// Let the computer play for player two
    #[arg(long)]
    pub computer: bool,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print game events as JSON lines instead of the message log
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Game configuration from the flags.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.player_one.clone(), self.player_two.clone(), self.computer)
    }
}
