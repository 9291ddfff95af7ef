//! Core value types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A piece a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Piece {
    /// Piece X (always moves first).
    X,
    /// Piece O.
    O,
}

impl Piece {
    /// Returns the other piece.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

/// A cell of the 3x3 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece yet.
    #[default]
    Empty,
    /// Holds a piece for the rest of the game.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece in this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Piece::X.opponent(), Piece::O);
        assert_eq!(Piece::O.opponent(), Piece::X);
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::X.to_string(), "X");
        assert_eq!(Piece::O.to_string(), "O");
    }

    #[test]
    fn test_cell_piece() {
        assert_eq!(Cell::Empty.piece(), None);
        assert_eq!(Cell::Occupied(Piece::O).piece(), Some(Piece::O));
        assert!(Cell::default().is_empty());
    }
}
