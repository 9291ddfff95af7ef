//! Game phases and outcomes.

use crate::types::Piece;
use serde::{Deserialize, Serialize};

/// Phase of the engine's state machine.
///
/// `NotStarted -> InProgress -> Finished`, and back to `InProgress` when a
/// new game is initialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game has been initialized.
    #[default]
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// Someone won or the board filled up.
    Finished,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// Winner's name.
        name: String,
        /// Winner's piece.
        piece: Piece,
    },
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner's name if there is one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name, .. } => Some(name),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { name, piece } => write!(f, "{name} ({piece}) wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
