//! Exhaustive minimax search.
//!
//! Every continuation is explored to the end of the game, without pruning
//! or depth limits. The 3x3 game tree has fewer than 9! leaves, so a full
//! search from the empty board finishes in well under a second.
//!
//! Scores are always from the standpoint of the player about to move: a
//! position is worth the best of its children, each negated because the
//! child is scored for the opponent.

use crate::error::SearchError;
use crate::position::Position;
use crate::rules::{Verdict, check_winner, evaluate, is_full};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use std::ops::Neg;
use tracing::{debug, instrument};

/// Game-theoretic value of a position under optimal play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
pub enum Score {
    /// The side to move loses.
    Loss = -1,
    /// Optimal play draws.
    Draw = 0,
    /// The side to move can force a win.
    Win = 1,
}

impl Score {
    /// Numeric value in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Self::Output {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

/// A legal move with its minimax value for the player making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedMove {
    /// Where the mark goes.
    pub position: Position,
    /// Outcome for the mover if both sides play optimally afterwards.
    pub score: Score,
}

/// Counters collected during one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions scored, including the root's children.
    pub nodes: u64,
}

/// Scores `board` for `to_move`, the player about to place a mark.
///
/// Returns [`Score::Win`] if `to_move` can force a win, [`Score::Loss`] if
/// the opponent can, and [`Score::Draw`] otherwise. A board that already
/// has a winner scores `Win` when that winner is `to_move` and `Loss`
/// otherwise; a full board scores `Draw`.
pub fn score(board: &Board, to_move: Player) -> Score {
    negamax(board, to_move, &mut SearchStats::default())
}

fn negamax(board: &Board, to_move: Player, stats: &mut SearchStats) -> Score {
    stats.nodes += 1;

    if let Some(winner) = check_winner(board) {
        return if winner == to_move {
            Score::Win
        } else {
            Score::Loss
        };
    }
    if is_full(board) {
        return Score::Draw;
    }

    board
        .empty_positions()
        .map(|pos| -negamax(&board.with(pos, to_move), to_move.opponent(), stats))
        .max()
        .unwrap_or(Score::Draw)
}

fn ranked(board: &Board, player: Player, stats: &mut SearchStats) -> Vec<RankedMove> {
    board
        .empty_positions()
        .map(|position| RankedMove {
            position,
            score: -negamax(&board.with(position, player), player.opponent(), stats),
        })
        .collect()
}

fn ensure_ongoing(board: &Board) -> Result<(), SearchError> {
    match evaluate(board) {
        Verdict::Ongoing => Ok(()),
        verdict => Err(SearchError::PreconditionViolation(verdict)),
    }
}

/// Scores every legal move for `player`, in ascending cell order.
///
/// # Errors
///
/// Returns [`SearchError::PreconditionViolation`] if the board is already
/// won or full.
#[instrument(skip(board), fields(board = %board))]
pub fn rank_moves(board: &Board, player: Player) -> Result<Vec<RankedMove>, SearchError> {
    ensure_ongoing(board)?;
    let mut stats = SearchStats::default();
    let moves = ranked(board, player, &mut stats);
    debug!(nodes = stats.nodes, moves = moves.len(), "Ranked moves");
    Ok(moves)
}

/// Picks the optimal move for `player`.
///
/// Among equally good moves the lowest cell index wins, so play is fully
/// deterministic. The board is taken by reference and never modified.
///
/// # Errors
///
/// Returns [`SearchError::PreconditionViolation`] if the board is already
/// won or full. Callers check for a terminal board before asking.
pub fn best_move(board: &Board, player: Player) -> Result<Position, SearchError> {
    best_move_with_stats(board, player).map(|(position, _)| position)
}

/// Same as [`best_move`], also reporting how many positions were scored.
///
/// # Errors
///
/// See [`best_move`].
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_with_stats(
    board: &Board,
    player: Player,
) -> Result<(Position, SearchStats), SearchError> {
    ensure_ongoing(board)?;

    let mut stats = SearchStats::default();
    let mut best: Option<RankedMove> = None;
    for candidate in ranked(board, player, &mut stats) {
        // Strict comparison keeps the first of equal moves.
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    // An ongoing board always has an empty square.
    let best = best.ok_or(SearchError::PreconditionViolation(Verdict::Draw))?;
    debug!(
        position = %best.position,
        score = %best.score,
        nodes = stats.nodes,
        "Best move found"
    );
    Ok((best.position, stats))
}
