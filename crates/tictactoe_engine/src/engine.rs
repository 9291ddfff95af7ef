//! Turn state machine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board and both players, applies move requests,
//! decides wins and ties, and plays for computer-controlled players. Every
//! call runs to completion, including any computer replies, before it
//! returns.

use crate::action::{Move, MoveOutcome};
use crate::board::Board;
use crate::config::{GameConfig, Seat};
use crate::error::BoardError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::phases::{GamePhase, Outcome};
use crate::player::Player;
use crate::position::Position;
use crate::presentation::Presentation;
use crate::random::{RandomSource, RngSource};
use crate::types::Piece;
use tracing::{debug, info, instrument, warn};

/// A single game table: one board, two players, one presentation.
///
/// Not thread-safe by itself. Keep it on one thread, or put the whole
/// engine behind a mutex.
#[derive(Debug)]
pub struct GameEngine<P, S = RngSource> {
    board: Board,
    players: Option<[Player; 2]>,
    active: usize,
    phase: GamePhase,
    outcome: Option<Outcome>,
    history: Vec<Move>,
    presentation: P,
    random: S,
}

impl<P: Presentation> GameEngine<P, RngSource> {
    /// Creates an engine seeded from the operating system.
    pub fn new(presentation: P) -> Self {
        Self::with_random(presentation, RngSource::from_entropy())
    }
}

impl<P: Presentation, S: RandomSource> GameEngine<P, S> {
    /// Creates an engine with an explicit random source.
    pub fn with_random(presentation: P, random: S) -> Self {
        Self {
            board: Board::new(),
            players: None,
            active: 0,
            phase: GamePhase::NotStarted,
            outcome: None,
            history: Vec::new(),
            presentation,
            random,
        }
    }

    /// Starts a new game, abandoning any game in progress.
    ///
    /// A coin decides whether player one gets X. X always moves first; if
    /// that is the computer, it plays before this returns.
    #[instrument(skip(self))]
    pub fn initialize_game(
        &mut self,
        player_one_name: &str,
        player_two_name: &str,
        player_two_computer: bool,
    ) {
        self.initialize(
            Seat::human(player_one_name),
            Seat::new(player_two_name, player_two_computer),
        );
    }

    /// Starts a new game from a config.
    pub fn start(&mut self, config: &GameConfig) {
        let (one, two) = config.seats();
        self.initialize(one, two);
    }

    /// Starts a new game with arbitrary seats. Both may be computers, in
    /// which case the whole game plays out before this returns.
    #[instrument(skip(self), fields(player_one = %one.name(), player_two = %two.name()))]
    pub fn initialize(&mut self, one: Seat, two: Seat) {
        self.board.reset();
        self.history.clear();
        self.outcome = None;
        self.players = None;
        self.phase = GamePhase::NotStarted;
        self.presentation.on_reset();

        let player_one_gets_x = self.random.flip_coin();
        let (first, second) = if player_one_gets_x {
            (Piece::X, Piece::O)
        } else {
            (Piece::O, Piece::X)
        };
        let players = [
            Player::new(one.name().clone(), first, *one.is_computer()),
            Player::new(two.name().clone(), second, *two.is_computer()),
        ];
        self.active = if first == Piece::X { 0 } else { 1 };
        self.phase = GamePhase::InProgress;

        info!(
            x = %players[self.active].name(),
            o = %players[1 - self.active].name(),
            "Game started"
        );
        self.presentation.on_players_assigned(&players);
        self.presentation.on_turn_changed(players[self.active].name());
        self.players = Some(players);

        self.play_computer_turns();
    }

    /// Plays the active player's piece at `(row, col)`.
    ///
    /// Requests with no game in progress, or onto an occupied cell, are
    /// ignored without notifying anyone. A computer reply, if due, is made
    /// before this returns; the returned outcome describes the requested
    /// move only.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for coordinates outside the grid
    /// while a game is in progress.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, BoardError> {
        if self.phase != GamePhase::InProgress {
            debug!(phase = ?self.phase, "Ignoring move outside a game");
            return Ok(MoveOutcome::Ignored);
        }
        if !self.board.is_valid_play(row, col)? {
            debug!("Ignoring move onto an occupied cell");
            return Ok(MoveOutcome::Ignored);
        }

        let outcome = self.play(Position::new(row, col)?);
        self.play_computer_turns();
        Ok(outcome)
    }

    /// Places the active piece on an empty cell and settles the turn.
    fn play(&mut self, pos: Position) -> MoveOutcome {
        let Some(players) = &self.players else {
            return MoveOutcome::Ignored;
        };
        let mover = players[self.active].clone();
        let piece = mover.piece();

        if let Err(error) = self.board.place_at(piece, pos) {
            warn!(%error, "Placement rejected");
            return MoveOutcome::Ignored;
        }
        self.history.push(Move::new(piece, pos));
        debug!(player = %mover.name(), %piece, position = %pos, "Piece placed");
        self.presentation.on_piece_placed(pos.row(), pos.col(), piece);
        self.check_invariants();

        if self.board.check_win(piece) {
            info!(winner = %mover.name(), "Game won");
            self.finish(Outcome::Winner {
                name: mover.name().to_string(),
                piece,
            });
            self.presentation.on_game_won(mover.name());
            return MoveOutcome::Won;
        }

        if self.board.check_tie() {
            info!("Game tied");
            self.finish(Outcome::Tie);
            self.presentation.on_game_tied();
            return MoveOutcome::Tied;
        }

        self.active = 1 - self.active;
        let next = players[self.active].name().to_string();
        self.presentation.on_turn_changed(&next);
        MoveOutcome::Continued
    }

    /// Moves for the active player while it is computer-controlled.
    fn play_computer_turns(&mut self) {
        while self.active_player().is_some_and(Player::is_computer) {
            let pos = self.pick_computer_cell();
            self.play(pos);
        }
    }

    /// Samples cells until one is empty.
    ///
    /// Only called mid-game, when at least one cell is empty.
    fn pick_computer_cell(&mut self) -> Position {
        loop {
            let pos = self.random.pick_cell();
            if self.board.is_open(pos) {
                debug!(position = %pos, "Computer chose cell");
                return pos;
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = GamePhase::Finished;
        self.outcome = Some(outcome);
    }

    fn check_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(&self.board, &self.history) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
        }
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player one and player two, once a game has been initialized.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Player to move. `None` unless a game is in progress.
    pub fn active_player(&self) -> Option<&Player> {
        if self.phase != GamePhase::InProgress {
            return None;
        }
        self.players.as_ref().map(|players| &players[self.active])
    }

    /// Result of the game, once finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Moves of the current game in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The presentation receiving notifications.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Mutable access to the presentation.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Consumes the engine, returning its presentation.
    pub fn into_presentation(self) -> P {
        self.presentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{EventLog, GameEvent};
    use crate::random::ScriptedSource;

    fn engine(coins: &[bool]) -> GameEngine<EventLog, ScriptedSource> {
        GameEngine::with_random(
            EventLog::new(),
            ScriptedSource::new().with_coins(coins.iter().copied()),
        )
    }

    #[test]
    fn test_new_engine_is_not_started() {
        let engine = engine(&[]);
        assert_eq!(engine.phase(), GamePhase::NotStarted);
        assert!(engine.active_player().is_none());
        assert!(engine.players().is_none());
    }

    #[test]
    fn test_tails_gives_x_to_player_two() {
        let mut engine = engine(&[false]);
        engine.initialize_game("A", "B", false);

        let players = engine.players().unwrap();
        assert_eq!(players[0].piece(), Piece::O);
        assert_eq!(players[1].piece(), Piece::X);
        assert_eq!(engine.active_player().unwrap().name(), "B");
    }

    #[test]
    fn test_initialize_notifies_reset_players_then_turn() {
        let mut engine = engine(&[true]);
        engine.initialize_game("A", "B", false);

        let events = engine.presentation().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], GameEvent::Reset);
        assert!(matches!(events[1], GameEvent::PlayersAssigned { .. }));
        assert_eq!(
            events[2],
            GameEvent::TurnChanged {
                player: "A".to_string()
            }
        );
    }

    #[test]
    fn test_play_before_start_is_ignored() {
        let mut engine = engine(&[]);
        assert_eq!(engine.attempt_move(0, 0), Ok(MoveOutcome::Ignored));
        assert!(engine.presentation().events().is_empty());
    }

    #[test]
    fn test_out_of_range_is_an_error_mid_game() {
        let mut engine = engine(&[true]);
        engine.initialize_game("A", "B", false);
        assert_eq!(
            engine.attempt_move(0, 3),
            Err(BoardError::OutOfRange { row: 0, col: 3 })
        );
        assert!(engine.history().is_empty());
    }
}
