//! Consistency checks over a board and the moves that built it.
//!
//! The engine runs these after every placement in debug builds.

use crate::action::Move;
use crate::board::Board;
use crate::types::Piece;

/// A property that must hold for a board and its move history.
pub trait Invariant {
    /// Checks if the invariant holds.
    fn holds(board: &Board, history: &[Move]) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together.
pub trait InvariantSet {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(board: &Board, history: &[Move]) -> Result<(), Vec<InvariantViolation>>;
}

impl<I1, I2> InvariantSet for (I1, I2)
where
    I1: Invariant,
    I2: Invariant,
{
    fn check_all(board: &Board, history: &[Move]) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(board, history) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(board, history) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Cells are never overwritten: replaying the history onto an empty board
/// never hits an occupied cell and reproduces the current board.
pub struct MonotonicBoard;

impl Invariant for MonotonicBoard {
    fn holds(board: &Board, history: &[Move]) -> bool {
        let mut rebuilt = Board::new();
        for mov in history {
            if rebuilt.place_at(mov.piece, mov.position).is_err() {
                return false;
            }
        }
        rebuilt == *board
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// X moves first and turns alternate, so X leads O by zero or one.
pub struct PieceBalance;

impl Invariant for PieceBalance {
    fn holds(board: &Board, _history: &[Move]) -> bool {
        let x = board.count(Piece::X);
        let o = board.count(Piece::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or leads it by one"
    }
}

/// Everything the engine checks after a placement.
pub type EngineInvariants = (MonotonicBoard, PieceBalance);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(EngineInvariants::check_all(&Board::new(), &[]).is_ok());
    }

    #[test]
    fn test_alternating_history_holds() {
        let history = [
            Move::new(Piece::X, Position::Center),
            Move::new(Piece::O, Position::TopLeft),
            Move::new(Piece::X, Position::BottomRight),
        ];
        let mut board = Board::new();
        for mov in &history {
            board.place_at(mov.piece, mov.position).unwrap();
        }
        assert!(EngineInvariants::check_all(&board, &history).is_ok());
    }

    #[test]
    fn test_board_out_of_sync_with_history_violates() {
        let history = [Move::new(Piece::X, Position::Center)];
        let mut board = Board::new();
        board.place_at(Piece::X, Position::Center).unwrap();
        board.place_at(Piece::O, Position::TopLeft).unwrap();

        let violations = EngineInvariants::check_all(&board, &history).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MonotonicBoard::description())]
        );
    }

    #[test]
    fn test_o_leading_violates_balance() {
        let mut board = Board::new();
        board.place_at(Piece::O, Position::Center).unwrap();
        assert!(!PieceBalance::holds(&board, &[]));
    }

    #[test]
    fn test_repeated_cell_in_history_violates() {
        let history = [
            Move::new(Piece::X, Position::Center),
            Move::new(Piece::O, Position::Center),
        ];
        let mut board = Board::new();
        board.place_at(Piece::X, Position::Center).unwrap();
        assert!(!MonotonicBoard::holds(&board, &history));
    }
}
