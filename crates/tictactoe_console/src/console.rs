//! Terminal presentation of the engine's notifications.

use serde_json::json;
use std::collections::VecDeque;
use std::io::{self, Write};
use tictactoe_engine::{Board, GameEvent, Piece, Player, Presentation};
use tracing::{debug, warn};

/// How many messages the log keeps.
pub const LOG_CAPACITY: usize = 3;

/// Rolling log of the most recent game messages.
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    /// Creates a log holding at most `capacity` messages.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a message, dropping the oldest when full.
    pub fn push(&mut self, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Messages, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Forgets every message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Board plus message log.
    Text,
    /// One JSON object per event.
    Json,
}

/// Presentation that writes to a terminal (or any writer).
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    out: W,
    mode: OutputMode,
    log: MessageLog,
    turns_announced: usize,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode,
            log: MessageLog::default(),
            turns_announced: 0,
        }
    }

    /// The message log.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Redraws the board and the message log. Does nothing in JSON mode,
    /// where events are written as they happen.
    ///
    /// # Errors
    ///
    /// Fails if the writer does.
    pub fn render(&mut self, board: &Board) -> io::Result<()> {
        if self.mode == OutputMode::Json {
            return Ok(());
        }
        writeln!(self.out, "\n{board}\n")?;
        for entry in self.log.entries() {
            writeln!(self.out, "{entry}")?;
        }
        self.out.flush()
    }

    /// Writes the board on request.
    ///
    /// # Errors
    ///
    /// Fails if the writer does.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => self.render(board),
            OutputMode::Json => {
                let cells: Vec<Option<Piece>> =
                    board.cells().iter().map(|cell| cell.piece()).collect();
                writeln!(self.out, "{}", json!({ "board": cells }))
            }
        }
    }

    /// Writes a message outside the game log (hints, input errors).
    ///
    /// # Errors
    ///
    /// Fails if the writer does.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.out, "{message}"),
            OutputMode::Json => writeln!(self.out, "{}", json!({ "notice": message })),
        }
    }

    fn emit(&mut self, event: GameEvent, message: Option<String>) {
        debug!(?event, "Presenting event");
        match self.mode {
            OutputMode::Text => {
                if let Some(message) = message {
                    self.log.push(message);
                }
            }
            OutputMode::Json => match serde_json::to_string(&event) {
                Ok(line) => {
                    if let Err(error) = writeln!(self.out, "{line}") {
                        warn!(%error, "Failed to write event");
                    }
                }
                Err(error) => warn!(%error, "Failed to serialize event"),
            },
        }
    }
}

impl<W: Write> Presentation for ConsolePresenter<W> {
    fn on_reset(&mut self) {
        self.log.clear();
        self.turns_announced = 0;
        self.emit(GameEvent::Reset, None);
    }

    fn on_players_assigned(&mut self, players: &[Player; 2]) {
        let message = players
            .iter()
            .find(|player| player.piece() == Piece::X)
            .map(|player| format!("{} is X's", player.name()));
        self.emit(
            GameEvent::PlayersAssigned {
                players: players.clone(),
            },
            message,
        );
    }

    fn on_piece_placed(&mut self, row: usize, col: usize, piece: Piece) {
        self.emit(GameEvent::PiecePlaced { row, col, piece }, None);
    }

    fn on_turn_changed(&mut self, player_name: &str) {
        // X always opens and turns alternate.
        let piece = if self.turns_announced % 2 == 0 {
            Piece::X
        } else {
            Piece::O
        };
        self.turns_announced += 1;
        self.emit(
            GameEvent::TurnChanged {
                player: player_name.to_string(),
            },
            Some(format!("{player_name}'s ({piece}'s) Turn")),
        );
    }

    fn on_game_won(&mut self, player_name: &str) {
        self.emit(
            GameEvent::GameWon {
                player: player_name.to_string(),
            },
            Some(format!("{player_name} Wins!")),
        );
    }

    fn on_game_tied(&mut self) {
        self.emit(GameEvent::GameTied, Some("It's a tie!".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> ConsolePresenter<Vec<u8>> {
        ConsolePresenter::new(Vec::new(), OutputMode::Text)
    }

    fn output(presenter: &ConsolePresenter<Vec<u8>>) -> String {
        String::from_utf8_lossy(presenter.writer()).into_owned()
    }

    #[test]
    fn test_log_keeps_three_newest() {
        let mut log = MessageLog::default();
        for n in 1..=5 {
            log.push(format!("message {n}"));
        }
        assert_eq!(
            log.entries().collect::<Vec<_>>(),
            vec!["message 3", "message 4", "message 5"]
        );
    }

    #[test]
    fn test_zero_capacity_log_stays_empty() {
        let mut log = MessageLog::new(0);
        log.push("ignored");
        assert_eq!(log.entries().count(), 0);
    }

    #[test]
    fn test_text_messages() {
        let mut presenter = text();
        presenter.on_reset();
        presenter.on_players_assigned(&[
            Player::human("Ada", Piece::O),
            Player::human("Grace", Piece::X),
        ]);
        presenter.on_turn_changed("Grace");
        presenter.on_piece_placed(1, 1, Piece::X);
        presenter.on_turn_changed("Ada");

        assert_eq!(
            presenter.log().entries().collect::<Vec<_>>(),
            vec!["Grace is X's", "Grace's (X's) Turn", "Ada's (O's) Turn"]
        );
        assert!(output(&presenter).is_empty());
    }

    #[test]
    fn test_reset_clears_log() {
        let mut presenter = text();
        presenter.on_game_won("Ada");
        presenter.on_reset();
        assert_eq!(presenter.log().entries().count(), 0);
    }

    #[test]
    fn test_render_draws_board_and_log() {
        let mut presenter = text();
        presenter.on_game_tied();
        presenter.render(&Board::new()).unwrap();

        let out = output(&presenter);
        assert!(out.contains("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9"));
        assert!(out.ends_with("It's a tie!\n"));
    }

    #[test]
    fn test_json_mode_streams_events() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputMode::Json);
        presenter.on_piece_placed(0, 1, Piece::X);
        presenter.on_game_won("Ada");
        presenter.render(&Board::new()).unwrap();

        assert_eq!(
            output(&presenter),
            "{\"event\":\"piece_placed\",\"row\":0,\"col\":1,\"piece\":\"X\"}\n\
             {\"event\":\"game_won\",\"player\":\"Ada\"}\n"
        );
        assert_eq!(presenter.log().entries().count(), 0);
    }

    #[test]
    fn test_json_notice() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputMode::Json);
        presenter.notice("try again").unwrap();
        assert_eq!(output(&presenter), "{\"notice\":\"try again\"}\n");
    }
}
