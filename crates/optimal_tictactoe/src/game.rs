//! Turn-taking state machine for a single game.
//!
//! The game starts awaiting X, alternates after every move that neither
//! wins nor fills the board, and stops accepting moves once won or drawn.
//! Only [`Game::reset`] leaves a finished game.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{Verdict, evaluate};
use crate::search;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to move.
    Awaiting(Player),
    /// The player completed a line.
    Won(Player),
    /// The board filled without a winner.
    Draw,
}

impl Phase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::Awaiting(_))
    }

    /// Returns the player to move, if the game is still going.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::Awaiting(player) => Some(*player),
            Phase::Won(_) | Phase::Draw => None,
        }
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(*player),
            Phase::Awaiting(_) | Phase::Draw => None,
        }
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    phase: Phase,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Awaiting(Player::X),
            history: Vec::new(),
        }
    }

    /// Resumes a game from an arbitrary board.
    ///
    /// The side to move is inferred from the mark counts. History starts
    /// empty since the order of earlier moves is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidBoard`] if the board could not arise from
    /// alternating play starting with X.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Result<Self, MoveError> {
        board.validate()?;
        let phase = match evaluate(&board) {
            Verdict::Ongoing => Phase::Awaiting(board.to_move()),
            Verdict::Winner(player) => Phase::Won(player),
            Verdict::Draw => Phase::Draw,
        };
        Ok(Self {
            board,
            phase,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the positions played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.phase.to_move()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Returns the verdict for the current board.
    pub fn outcome(&self) -> Verdict {
        match self.phase {
            Phase::Awaiting(_) => Verdict::Ongoing,
            Phase::Won(player) => Verdict::Winner(player),
            Phase::Draw => Verdict::Draw,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success returns the phase after the move. A rejected move leaves
    /// the game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has finished and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn place(&mut self, pos: Position) -> Result<Phase, MoveError> {
        let player = self.phase.to_move().ok_or(MoveError::GameOver)?;

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);

        self.phase = match evaluate(&self.board) {
            Verdict::Winner(winner) => Phase::Won(winner),
            Verdict::Draw => Phase::Draw,
            Verdict::Ongoing => Phase::Awaiting(player.opponent()),
        };

        debug!(player = %player, position = %pos, phase = ?self.phase, "Move applied");
        if self.phase.is_over() {
            info!(outcome = %self.outcome(), moves = self.history.len(), "Game finished");
        }
        Ok(self.phase)
    }

    /// Places the current player's mark at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices past 8, otherwise as
    /// [`Game::place`].
    pub fn place_index(&mut self, index: usize) -> Result<Phase, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Plays the optimal move for the current player.
    ///
    /// Returns where the mark went and the resulting phase.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has finished.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Result<(Position, Phase), MoveError> {
        let player = self.phase.to_move().ok_or(MoveError::GameOver)?;
        // Awaiting implies an ongoing board, which the search accepts.
        let pos = search::best_move(&self.board, player).map_err(|_| MoveError::GameOver)?;
        let phase = self.place(pos)?;
        Ok((pos, phase))
    }

    /// Clears the board and returns to X's turn.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = Phase::Awaiting(Player::X);
        self.history.clear();
        info!("Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
