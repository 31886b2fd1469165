//! Title and status text shown above the board.

use crate::mode::{Lineup, SeatKind};
use optimal_tictactoe::{Board, Phase, Player, winning_line};

/// Heading describing who plays whom.
pub fn title(lineup: Lineup) -> String {
    match (lineup.x, lineup.o) {
        (SeatKind::Human, SeatKind::Computer) => {
            "Single Player: You (X) vs Computer (O)".to_string()
        }
        (SeatKind::Computer, SeatKind::Human) => {
            "Single Player: Computer (X) vs You (O)".to_string()
        }
        (SeatKind::Human, SeatKind::Human) => "Multiplayer: Player X vs Player O".to_string(),
        (SeatKind::Computer, SeatKind::Computer) => "Computer (X) vs Computer (O)".to_string(),
    }
}

/// Status line for the current phase.
pub fn status(lineup: Lineup, phase: Phase) -> String {
    match phase {
        Phase::Awaiting(player) => turn(lineup, player),
        Phase::Won(winner) => format!(
            "Player {} Wins!!! {} Loses!",
            winner,
            winner.opponent()
        ),
        Phase::Draw => "Draw!".to_string(),
    }
}

/// Cells of the completed line, e.g. `Three in a row: 1-5-9`.
pub fn winning_cells(board: &Board) -> Option<String> {
    winning_line(board).map(|(_, line)| {
        let cells: Vec<String> = line
            .iter()
            .map(|pos| (pos.to_index() + 1).to_string())
            .collect();
        format!("Three in a row: {}", cells.join("-"))
    })
}

fn turn(lineup: Lineup, player: Player) -> String {
    let humans_only = lineup.x == SeatKind::Human && lineup.o == SeatKind::Human;
    match lineup.seat(player) {
        SeatKind::Human if humans_only => format!("Player {}'s Turn", player),
        SeatKind::Human => format!("Your Turn ({})", player),
        SeatKind::Computer => format!("Computer's Turn ({})", player),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::GameMode;

    #[test]
    fn test_single_player_text() {
        let lineup = GameMode::Single.lineup();
        assert_eq!(title(lineup), "Single Player: You (X) vs Computer (O)");
        assert_eq!(status(lineup, Phase::Awaiting(Player::X)), "Your Turn (X)");
        assert_eq!(
            status(lineup, Phase::Awaiting(Player::O)),
            "Computer's Turn (O)"
        );
    }

    #[test]
    fn test_multiplayer_text() {
        let lineup = GameMode::Multi.lineup();
        assert_eq!(title(lineup), "Multiplayer: Player X vs Player O");
        assert_eq!(status(lineup, Phase::Awaiting(Player::O)), "Player O's Turn");
    }

    #[test]
    fn test_result_text() {
        let lineup = GameMode::Single.lineup();
        assert_eq!(
            status(lineup, Phase::Won(Player::X)),
            "Player X Wins!!! O Loses!"
        );
        assert_eq!(
            status(lineup, Phase::Won(Player::O)),
            "Player O Wins!!! X Loses!"
        );
        assert_eq!(status(lineup, Phase::Draw), "Draw!");
    }

    #[test]
    fn test_winning_cells() {
        let won: Board = "X.O/.XO/..X".parse().expect("Valid board");
        assert_eq!(winning_cells(&won).as_deref(), Some("Three in a row: 1-5-9"));
        assert_eq!(winning_cells(&Board::new()), None);
    }
}
