//! Moves and their results.

use crate::position::Position;
use crate::types::Piece;
use serde::{Deserialize, Serialize};

/// A piece placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece placed.
    pub piece: Piece,
    /// Where it went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(piece: Piece, position: Position) -> Self {
        Self { piece, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.piece, self.position.label())
    }
}

/// What a single move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing happened: no game in progress, or the cell was taken.
    Ignored,
    /// Piece placed, turn passed to the other player.
    Continued,
    /// Piece placed and it completed a line.
    Won,
    /// Piece placed and filled the board.
    Tied,
}

impl MoveOutcome {
    /// Whether a piece was placed.
    pub fn placed(self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}
