//! Game mode selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Game mode - who sits opposite the first human?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Human plays X against the computer as O.
    #[default]
    Single,
    /// Two humans share the terminal.
    Multi,
}

impl GameMode {
    /// Resolves a loosely specified mode, falling back to single player.
    ///
    /// Missing or unknown values select [`GameMode::Single`].
    #[instrument]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::default(),
            Some(raw) => Self::from_str(raw).unwrap_or_else(|_| {
                warn!(mode = raw, "Unknown game mode, defaulting to single player");
                Self::default()
            }),
        }
    }

    /// Seats for this mode.
    pub fn lineup(self) -> Lineup {
        match self {
            GameMode::Single => Lineup::new(SeatKind::Human, SeatKind::Computer),
            GameMode::Multi => Lineup::new(SeatKind::Human, SeatKind::Human),
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatKind {
    /// Moves typed at the terminal.
    Human,
    /// Moves chosen by the search engine.
    Computer,
}

/// Controllers for the X and O seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    /// Controller of X, who moves first.
    pub x: SeatKind,
    /// Controller of O.
    pub o: SeatKind,
}

impl Lineup {
    /// Creates a lineup.
    pub fn new(x: SeatKind, o: SeatKind) -> Self {
        Self { x, o }
    }

    /// Both seats played by the engine.
    pub fn computers() -> Self {
        Self::new(SeatKind::Computer, SeatKind::Computer)
    }

    /// Controller of `player`'s seat.
    pub fn seat(&self, player: optimal_tictactoe::Player) -> SeatKind {
        match player {
            optimal_tictactoe::Player::X => self.x,
            optimal_tictactoe::Player::O => self.o,
        }
    }

    /// Returns true if at least one seat is human.
    pub fn has_human(&self) -> bool {
        self.x == SeatKind::Human || self.o == SeatKind::Human
    }
}
