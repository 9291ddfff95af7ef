//! Tic-tac-toe game-state engine.
//!
//! Tracks a 3x3 board, validates moves, detects wins and ties, and
//! alternates turns between two players, one of which may be played by
//! the engine itself.
//!
//! # Architecture
//!
//! - **Board**: cells, placement, win and tie checks
//! - **Player**: name, piece, computer flag
//! - **GameEngine**: the turn state machine
//! - **Presentation**: observer the engine reports to
//! - **RandomSource**: injectable coin flips and cell picks
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EventLog, GameEngine, GamePhase, RngSource};
//!
//! let mut engine = GameEngine::with_random(EventLog::new(), RngSource::seeded(1));
//! engine.initialize_game("Ada", "Grace", true);
//! assert_eq!(engine.phase(), GamePhase::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod error;
mod invariants;
mod phases;
mod player;
mod position;
mod presentation;
mod random;
pub mod rules;
mod types;

pub use action::{Move, MoveOutcome};
pub use board::Board;
pub use config::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameConfig, Seat};
pub use engine::GameEngine;
pub use error::BoardError;
pub use invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoard, PieceBalance,
};
pub use phases::{GamePhase, Outcome};
pub use player::{Player, make_player};
pub use position::Position;
pub use presentation::{EventLog, GameEvent, Presentation};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use types::{Cell, Piece};
