//! Error types for board construction, move application and search.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error};

/// A board that cannot be built or did not arise from legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The board did not have exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A numeric cell outside `{-1, 0, 1}`.
    #[display("Cell {} holds {}, expected -1, 0 or 1", index, value)]
    InvalidCell {
        /// Cell index.
        index: usize,
        /// Offending value.
        value: i8,
    },

    /// A notation symbol that is neither a mark nor an empty square.
    #[display("Cell {} holds '{}', expected X, O or .", index, symbol)]
    InvalidSymbol {
        /// Cell index.
        index: usize,
        /// Offending symbol.
        symbol: char,
    },

    /// X must lead O by zero or one mark.
    #[display("X has {} marks and O has {}; X must lead by zero or one", x, o)]
    MarkImbalance {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both players hold a completed line.
    #[display("Both players have three in a row")]
    BothWon,

    /// A mark was placed after the game was already won.
    #[display("Player {} already won but play continued", winner)]
    PlayedAfterWin {
        /// Holder of the completed line.
        winner: Player,
    },
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The cell index is outside the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The board cannot be resumed as a game.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(BoardError),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::InvalidBoard(err)
    }
}

/// Misuse of the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Search was asked for a move on a won or full board.
    #[display("No move to search: the board is already decided ({})", _0)]
    PreconditionViolation(#[error(not(source))] crate::rules::Verdict),
}
