//! Command-line interface for the tic-tac-toe front end.

use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use optimal_tictactoe::Board;

/// Tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal with an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $TICTACTOE_CONFIG, then ./tictactoe.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play {
        /// single (you vs computer) or multi (two players)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the best move for the side to move
    Hint {
        /// Board as nine symbols, e.g. "XX./OO./..."
        board: Board,
    },

    /// Score every legal move for the side to move
    Analyze {
        /// Board as nine symbols, e.g. "X../.../..."
        board: Board,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides
    Selfplay {
        /// Pause before each move, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
}
