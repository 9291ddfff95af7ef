//! Named squares of the 3x3 grid.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board, in row-major order.
///
/// This is the only place where the `0..=2` row and column range is
/// checked. Everything past [`Position::new`] is in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a row and column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either coordinate exceeds 2.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row > 2 || col > 2 {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a label, ignoring case and treating spaces, hyphens and
    /// underscores alike (`"top left"`, `"TOP_LEFT"`).
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip_corners() {
        assert_eq!(Position::new(0, 0), Ok(Position::TopLeft));
        assert_eq!(Position::new(1, 1), Ok(Position::Center));
        assert_eq!(Position::new(2, 0), Ok(Position::BottomLeft));
        assert_eq!(Position::BottomLeft.row(), 2);
        assert_eq!(Position::BottomLeft.col(), 0);
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::new(3, 0),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Position::new(1, 7),
            Err(BoardError::OutOfRange { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_index_conversion() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_label_is_forgiving() {
        assert_eq!(Position::from_label("center"), Some(Position::Center));
        assert_eq!(Position::from_label("Top left"), Some(Position::TopLeft));
        assert_eq!(Position::from_label("BOTTOM_RIGHT"), Some(Position::BottomRight));
        assert_eq!(Position::from_label("middle"), None);
        assert_eq!(Position::from_label(""), None);
    }
}
