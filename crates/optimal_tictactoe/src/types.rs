//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::position::Position;
use crate::rules::LINES;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Numeric mark used by the cell encoding: X is `-1`, O is `+1`.
    pub fn sign(self) -> i8 {
        match self {
            Player::X => -1,
            Player::O => 1,
        }
    }

    /// Inverse of [`Player::sign`].
    pub fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            -1 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Numeric cell value: `0` for empty, otherwise the player's sign.
    pub fn to_cell(self) -> i8 {
        self.player().map_or(0, Player::sign)
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' | '0' => Some(Square::Empty),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: search explores each continuation on its own copy
/// rather than placing and removing marks on a shared board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from the numeric encoding (`0` empty, `-1` X, `+1` O).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] unless exactly nine cells are given
    /// and [`BoardError::InvalidCell`] for any value outside `{-1, 0, 1}`.
    #[instrument]
    pub fn from_cells(cells: &[i8]) -> Result<Self, BoardError> {
        if cells.len() != 9 {
            return Err(BoardError::WrongLength(cells.len()));
        }
        let mut board = Self::new();
        for (index, &cell) in cells.iter().enumerate() {
            let square = match cell {
                0 => Square::Empty,
                sign => Player::from_sign(sign)
                    .map(Square::Occupied)
                    .ok_or(BoardError::InvalidCell { index, value: cell })?,
            };
            board.squares[index] = square;
        }
        Ok(board)
    }

    /// Returns the numeric encoding of the board.
    pub fn to_cells(&self) -> [i8; 9] {
        self.squares.map(Square::to_cell)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` marked at `pos`.
    pub fn with(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Iterates the empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Player whose turn it is, assuming X moved first.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Checks that the board is reachable by alternating play from X.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MarkImbalance`] if X does not lead O by zero or
    /// one mark, [`BoardError::BothWon`] if both players hold a line, and
    /// [`BoardError::PlayedAfterWin`] if a mark follows the winning one.
    #[instrument(skip(self), fields(board = %self))]
    pub fn validate(&self) -> Result<(), BoardError> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x != o && x != o + 1 {
            return Err(BoardError::MarkImbalance { x, o });
        }

        let holds_line = |player: Player| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&p| self.get(p) == Square::Occupied(player)))
        };
        match (holds_line(Player::X), holds_line(Player::O)) {
            (true, true) => Err(BoardError::BothWon),
            // The winning mark must be the last one placed.
            (true, false) if x != o + 1 => {
                Err(BoardError::PlayedAfterWin { winner: Player::X })
            }
            (false, true) if x != o => Err(BoardError::PlayedAfterWin { winner: Player::O }),
            _ => Ok(()),
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: nine symbols in row-major order, rows split by `/`.
///
/// `X..` `/` `.O.` `/` `...` for a board with X top-left and O in the center.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the compact notation. `/` and whitespace are ignored, empty
    /// squares may be written as `.`, `-`, `_` or `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();
        if symbols.len() != 9 {
            return Err(BoardError::WrongLength(symbols.len()));
        }

        let mut board = Self::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            board.squares[index] =
                Square::from_symbol(symbol).ok_or(BoardError::InvalidSymbol { index, symbol })?;
        }
        Ok(board)
    }
}
