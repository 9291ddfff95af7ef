//! Board contract errors.

use derive_more::{Display, Error};

/// Error raised when a caller breaks the board's contract.
///
/// These indicate a bug in the caller. Ordinary user mistakes such as
/// clicking an occupied cell are not errors; the engine ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Placement onto a cell that already holds a piece.
    #[display("Cell ({row}, {col}) is already occupied")]
    InvalidPlacement {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}
