//! Players of a single game.

use crate::types::Piece;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player for one game.
///
/// Immutable once built; a new game builds new players. The name is
/// trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Player {
    #[new(into)]
    name: String,
    piece: Piece,
    is_computer: bool,
}

impl Player {
    /// Creates a human-controlled player.
    pub fn human(name: impl Into<String>, piece: Piece) -> Self {
        Self::new(name, piece, false)
    }

    /// Creates a computer-controlled player.
    pub fn computer(name: impl Into<String>, piece: Piece) -> Self {
        Self::new(name, piece, true)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned piece.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Whether the engine moves for this player.
    pub fn is_computer(&self) -> bool {
        self.is_computer
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.piece)
    }
}

/// Builds a player. Pass `false` for `is_computer` for a human.
pub fn make_player(name: impl Into<String>, piece: Piece, is_computer: bool) -> Player {
    Player::new(name, piece, is_computer)
}
