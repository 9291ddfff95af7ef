//! The 3x3 board.

use crate::error::BoardError;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Piece};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Cells only ever move from empty to occupied. The one way back is
/// [`Board::reset`], which starts a fresh game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.cell(Position::new(row, col)?))
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks whether a piece may be placed at `(row, col)`.
    ///
    /// Never mutates the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] outside the grid.
    #[instrument(skip(self))]
    pub fn is_valid_play(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.is_open(Position::new(row, col)?))
    }

    /// Checks whether a position is empty.
    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Places a piece at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] outside the grid and
    /// [`BoardError::InvalidPlacement`] if the cell is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, piece: Piece, row: usize, col: usize) -> Result<(), BoardError> {
        self.place_at(piece, Position::new(row, col)?)
    }

    /// Places a piece at a position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPlacement`] if the cell is taken.
    pub fn place_at(&mut self, piece: Piece, pos: Position) -> Result<(), BoardError> {
        if !self.is_open(pos) {
            return Err(BoardError::InvalidPlacement {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.cells[pos.to_index()] = Cell::Occupied(piece);
        Ok(())
    }

    /// Checks whether `piece` holds any complete line.
    pub fn check_win(&self, piece: Piece) -> bool {
        rules::check_win(self, piece)
    }

    /// Checks whether no empty cell remains.
    ///
    /// Only meaningful after [`Board::check_win`] has been evaluated for the
    /// last mover: a full board that completes a line is a win.
    pub fn check_tie(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_open(*pos))
            .collect()
    }

    /// Counts cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.piece() == Some(piece))
            .count()
    }
}

/// Renders rows like `X|2|O` separated by `-+-+-`. Empty cells show their
/// 1-based square number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(piece) => write!(f, "{piece}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
