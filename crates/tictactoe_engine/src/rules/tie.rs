//! Tie detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Cell;

/// Checks if the board is full (all cells occupied).
///
/// A full board is a tie only when the last move did not complete a line.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
