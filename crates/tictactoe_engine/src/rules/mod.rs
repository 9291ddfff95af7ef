//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Callers evaluate a win
//! for the last mover before asking whether the board is full.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{LINES, check_win, winner};
