//! Terminal-state verdicts combining win and draw detection.

use super::draw::is_full;
use super::win::check_winner;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Whether a board is still being played, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// At least one empty square and no winner.
    Ongoing,
    /// The player holds a completed line.
    Winner(Player),
    /// Full board with no winner.
    Draw,
}

impl Verdict {
    /// Returns true unless the game is still going.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner(player) => Some(*player),
            Verdict::Ongoing | Verdict::Draw => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "Ongoing"),
            Verdict::Winner(player) => write!(f, "Player {} wins", player),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies the board.
///
/// A winner takes precedence over a full board, so a game finished by a
/// winning ninth mark is a win.
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(winner) = check_winner(board) {
        Verdict::Winner(winner)
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}

/// True iff someone has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    evaluate(board).is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        assert_eq!(evaluate(&Board::new()), Verdict::Ongoing);
        assert_eq!(
            evaluate(&"OOO/XX./X..".parse().unwrap()),
            Verdict::Winner(Player::O)
        );
        assert_eq!(evaluate(&"XOX/OXX/OXO".parse().unwrap()), Verdict::Draw);
        assert_eq!(
            evaluate(&"XXX/OOX/XOO".parse().unwrap()),
            Verdict::Winner(Player::X)
        );
    }

    #[test]
    fn test_is_terminal() {
        assert!(!is_terminal(&Board::new()));
        assert!(is_terminal(&"XOX/OXX/OXO".parse().unwrap()));
        assert!(is_terminal(&"X../.X./..X".parse().unwrap()));
    }
}
