//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Piece};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `piece` fills any of the 8 lines.
///
/// Stops at the first complete line.
pub fn check_win(board: &Board, piece: Piece) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.cell(*pos) == Cell::Occupied(piece)))
}

/// Returns the piece holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Piece> {
    [Piece::X, Piece::O]
        .into_iter()
        .find(|piece| check_win(board, *piece))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, line: &[Position; 3], piece: Piece) {
        for pos in line {
            board.place_at(piece, *pos).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Piece::X));
        assert!(!check_win(&board, Piece::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_its_piece_only() {
        for line in &LINES {
            for piece in [Piece::X, Piece::O] {
                let mut board = Board::new();
                fill(&mut board, line, piece);
                assert!(check_win(&board, piece), "{line:?} should win for {piece}");
                assert!(!check_win(&board, piece.opponent()));
                assert_eq!(winner(&board), Some(piece));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.place_at(Piece::X, Position::TopLeft).unwrap();
        board.place_at(Piece::O, Position::TopCenter).unwrap();
        board.place_at(Piece::X, Position::TopRight).unwrap();
        assert!(!check_win(&board, Piece::X));
        assert!(!check_win(&board, Piece::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place_at(Piece::O, Position::TopRight).unwrap();
        board.place_at(Piece::O, Position::Center).unwrap();
        assert!(!check_win(&board, Piece::O));
    }
}
