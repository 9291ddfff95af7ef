//! Game setup configuration.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Name given to player one when none is supplied.
pub const DEFAULT_PLAYER_ONE: &str = "Player One";
/// Name given to player two when none is supplied.
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// Everything needed to start a game: two names and whether the engine
/// plays for player two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameConfig {
    /// Player one's name.
    #[new(into)]
    player_one: String,
    /// Player two's name.
    #[new(into)]
    player_two: String,
    /// Whether the engine moves for player two.
    player_two_computer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, false)
    }
}

/// One side of the table before pieces are dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Seat {
    /// Display name.
    #[new(into)]
    name: String,
    /// Whether the engine moves for this seat.
    is_computer: bool,
}

impl Seat {
    /// A human seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// A computer-controlled seat.
    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

impl GameConfig {
    /// Splits the config into player one's and player two's seats.
    pub fn seats(&self) -> (Seat, Seat) {
        (
            Seat::human(self.player_one.clone()),
            Seat::new(self.player_two.clone(), self.player_two_computer),
        )
    }
}
