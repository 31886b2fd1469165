//! One-shot board analysis for the `hint` and `analyze` commands.

use anyhow::{Result, bail};
use optimal_tictactoe::{Board, Game, Player, Position, RankedMove, best_move, rank_moves};
use serde::Serialize;
use tracing::instrument;

/// Every legal move of a position with its minimax score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    pub board: String,
    /// Side to move.
    pub to_move: Player,
    /// Legal moves in cell order.
    pub moves: Vec<RankedMove>,
    /// The move the computer would play.
    pub best: Position,
}

impl Analysis {
    /// Renders the analysis as a small table, best move first.
    pub fn to_text(&self) -> String {
        let mut text = format!("{} to move on {}\n", self.to_move, self.board);
        for mv in &self.moves {
            let marker = if mv.position == self.best { '*' } else { ' ' };
            text.push_str(&format!(
                "{} {} {:<13} {}\n",
                marker,
                mv.position.to_index() + 1,
                mv.position.label(),
                mv.score
            ));
        }
        text
    }
}

fn side_to_move(board: &Board) -> Result<Player> {
    let game = Game::from_board(*board)?;
    match game.to_move() {
        Some(player) => Ok(player),
        None => bail!("Game is already over: {}", game.outcome()),
    }
}

/// Ranks every legal move for the side to move on `board`.
///
/// # Errors
///
/// Fails if the board is unreachable or already decided.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Result<Analysis> {
    let to_move = side_to_move(board)?;
    let moves = rank_moves(board, to_move)?;
    // First strictly greatest, matching `best_move`.
    let best = moves
        .iter()
        .fold(None::<&RankedMove>, |best, mv| match best {
            Some(b) if b.score >= mv.score => Some(b),
            _ => Some(mv),
        })
        .map(|mv| mv.position)
        .ok_or_else(|| anyhow::anyhow!("No legal moves on {}", board))?;
    Ok(Analysis {
        board: board.to_string(),
        to_move,
        moves,
        best,
    })
}

/// Suggests the optimal move for the side to move on `board`.
///
/// # Errors
///
/// Fails if the board is unreachable or already decided.
#[instrument(skip(board), fields(board = %board))]
pub fn hint(board: &Board) -> Result<String> {
    let to_move = side_to_move(board)?;
    let position = best_move(board, to_move)?;
    Ok(format!(
        "{} should play {} (cell {})",
        to_move,
        position,
        position.to_index() + 1
    ))
}
