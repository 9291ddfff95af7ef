//! Observer seam between the engine and whatever shows the game.
//!
//! The engine never renders anything. It reports what happened through
//! [`Presentation`] and the front end decides how to show it.

use crate::player::Player;
use crate::types::Piece;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Receives the engine's notifications.
///
/// Calls are synchronous and made while the engine is mid-operation, so
/// implementations must not call back into the engine.
pub trait Presentation {
    /// A new game is starting; clear any previous board.
    fn on_reset(&mut self);

    /// Pieces have been dealt to both players.
    fn on_players_assigned(&mut self, players: &[Player; 2]);

    /// A piece landed on `(row, col)`.
    fn on_piece_placed(&mut self, row: usize, col: usize, piece: Piece);

    /// It is now `player_name`'s turn.
    fn on_turn_changed(&mut self, player_name: &str);

    /// `player_name` completed a line.
    fn on_game_won(&mut self, player_name: &str);

    /// The board filled up with no line.
    fn on_game_tied(&mut self);
}

/// Headless games discard every notification.
impl Presentation for () {
    fn on_reset(&mut self) {}
    fn on_players_assigned(&mut self, _players: &[Player; 2]) {}
    fn on_piece_placed(&mut self, _row: usize, _col: usize, _piece: Piece) {}
    fn on_turn_changed(&mut self, _player_name: &str) {}
    fn on_game_won(&mut self, _player_name: &str) {}
    fn on_game_tied(&mut self) {}
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn on_reset(&mut self) {
        (**self).on_reset();
    }

    fn on_players_assigned(&mut self, players: &[Player; 2]) {
        (**self).on_players_assigned(players);
    }

    fn on_piece_placed(&mut self, row: usize, col: usize, piece: Piece) {
        (**self).on_piece_placed(row, col, piece);
    }

    fn on_turn_changed(&mut self, player_name: &str) {
        (**self).on_turn_changed(player_name);
    }

    fn on_game_won(&mut self, player_name: &str) {
        (**self).on_game_won(player_name);
    }

    fn on_game_tied(&mut self) {
        (**self).on_game_tied();
    }
}

/// A notification as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// See [`Presentation::on_reset`].
    Reset,
    /// See [`Presentation::on_players_assigned`].
    PlayersAssigned {
        /// Player one, then player two.
        players: [Player; 2],
    },
    /// See [`Presentation::on_piece_placed`].
    PiecePlaced {
        /// Row of the placement.
        row: usize,
        /// Column of the placement.
        col: usize,
        /// Piece placed.
        piece: Piece,
    },
    /// See [`Presentation::on_turn_changed`].
    TurnChanged {
        /// Player now to move.
        player: String,
    },
    /// See [`Presentation::on_game_won`].
    GameWon {
        /// The winner.
        player: String,
    },
    /// See [`Presentation::on_game_tied`].
    GameTied,
}

impl GameEvent {
    /// Replays this event into a presentation.
    pub fn deliver<P: Presentation + ?Sized>(&self, presentation: &mut P) {
        match self {
            GameEvent::Reset => presentation.on_reset(),
            GameEvent::PlayersAssigned { players } => presentation.on_players_assigned(players),
            GameEvent::PiecePlaced { row, col, piece } => {
                presentation.on_piece_placed(*row, *col, *piece)
            }
            GameEvent::TurnChanged { player } => presentation.on_turn_changed(player),
            GameEvent::GameWon { player } => presentation.on_game_won(player),
            GameEvent::GameTied => presentation.on_game_tied(),
        }
    }
}

/// Records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Placements recorded so far, as `(row, col, piece)`.
    pub fn placements(&self) -> Vec<(usize, usize, Piece)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::PiecePlaced { row, col, piece } => Some((*row, *col, *piece)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, event: GameEvent) {
        trace!(?event, "Recording event");
        self.events.push(event);
    }
}

impl Presentation for EventLog {
    fn on_reset(&mut self) {
        self.record(GameEvent::Reset);
    }

    fn on_players_assigned(&mut self, players: &[Player; 2]) {
        self.record(GameEvent::PlayersAssigned {
            players: players.clone(),
        });
    }

    fn on_piece_placed(&mut self, row: usize, col: usize, piece: Piece) {
        self.record(GameEvent::PiecePlaced { row, col, piece });
    }

    fn on_turn_changed(&mut self, player_name: &str) {
        self.record(GameEvent::TurnChanged {
            player: player_name.to_string(),
        });
    }

    fn on_game_won(&mut self, player_name: &str) {
        self.record(GameEvent::GameWon {
            player: player_name.to_string(),
        });
    }

    fn on_game_tied(&mut self) {
        self.record(GameEvent::GameTied);
    }
}
