//! Terminal front end for `optimal_tictactoe`.
//!
//! # Architecture
//!
//! - **Config**: TOML file, environment and flags resolved into [`AppConfig`]
//! - **Seats**: human (terminal lines) or computer (minimax) players
//! - **Session**: the turn loop, status text and restart handling
//! - **Analysis**: one-shot `hint` and `analyze` commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod mode;
mod seats;
mod session;
mod status;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, CONFIG_ENV, ConfigError, DEFAULT_CONFIG_FILE, MODE_ENV};
pub use mode::{GameMode, Lineup, SeatKind};

// Crate-level exports - Play
pub use seats::{Action, ComputerSeat, HumanSeat, Seat, SharedInput, parse_command, seats_for};
pub use session::Session;
pub use status::{status, title, winning_cells};

// Crate-level exports - Analysis
pub use analysis::{Analysis, analyze, hint};
