//! Tic-tac-toe with a perfect computer opponent.
//!
//! The crate is pure game logic with no I/O:
//!
//! - **Rules**: win, draw and terminal detection over the 8 lines
//! - **Search**: exhaustive minimax returning the optimal move
//! - **Game**: the turn-taking state machine a front end drives
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{Board, Player, Position, best_move};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(best_move(&board, Player::X), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{
    LINES, Line, Verdict, check_winner, evaluate, is_draw, is_full, is_terminal, winning_line,
};

// Crate-level exports - Search
pub use search::{
    RankedMove, Score, SearchStats, best_move, best_move_with_stats, rank_moves, score,
};

// Crate-level exports - Game state machine
pub use game::{Game, Phase};

// Crate-level exports - Errors
pub use error::{BoardError, MoveError, SearchError};
