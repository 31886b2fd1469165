//! Seat trait and implementations.
//!
//! A seat decides the next action for one side of the board: a human
//! typing at the terminal or the search engine.

use anyhow::Result;
use optimal_tictactoe::{Game, Position, best_move};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, Lines};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::mode::{Lineup, SeatKind};

/// Line input shared by every human seat at the same terminal.
pub type SharedInput<R> = Arc<Mutex<Lines<R>>>;

/// What a seat wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place the seat's mark.
    Place(Position),
    /// Abandon the current game and start over.
    Restart,
    /// Leave the session.
    Quit,
    /// Input that is neither a cell nor a command.
    Unrecognized(String),
}

/// Trait for anything that can take a turn.
#[async_trait::async_trait]
pub trait Seat: Send {
    /// Decides the next action for the side to move.
    ///
    /// Called with a finished game to ask whether to restart or quit.
    async fn next_action(&mut self, game: &Game) -> Result<Action>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;
}

/// Parses one line of terminal input.
///
/// Accepts `r`/`restart`, `q`/`quit`, a cell number `1`-`9`, or a
/// position label such as `center` or `top left`.
pub fn parse_command(line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "restart" => Action::Restart,
        "q" | "quit" | "exit" => Action::Quit,
        _ => Position::from_label_or_number(trimmed)
            .map(Action::Place)
            .unwrap_or_else(|| Action::Unrecognized(trimmed.to_string())),
    }
}

/// Human player typing at a terminal.
pub struct HumanSeat<R> {
    name: String,
    input: SharedInput<R>,
}

impl<R> HumanSeat<R> {
    /// Creates a human seat reading from `input`.
    pub fn new(name: impl Into<String>, input: SharedInput<R>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl<R> Seat for HumanSeat<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_action(&mut self, _game: &Game) -> Result<Action> {
        let line = self.input.lock().await.next_line().await?;
        let action = match line {
            Some(line) => parse_command(&line),
            // End of input ends the session.
            None => Action::Quit,
        };
        debug!(seat = %self.name, ?action, "Human input");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Computer player backed by the minimax search.
pub struct ComputerSeat {
    name: String,
    delay: Duration,
}

impl ComputerSeat {
    /// Creates a computer seat that waits `delay` before each move.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Seat for ComputerSeat {
    #[instrument(skip(self, game), fields(seat = %self.name))]
    async fn next_action(&mut self, game: &Game) -> Result<Action> {
        let Some(player) = game.to_move() else {
            return Ok(Action::Quit);
        };

        // Cosmetic pause; the move is always played once it starts.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let position = best_move(game.board(), player)?;
        debug!(player = %player, position = %position, "Computer chose move");
        Ok(Action::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builds the X and O seats for `lineup`.
pub fn seats_for<R>(
    lineup: Lineup,
    input: SharedInput<R>,
    delay: Duration,
) -> (Box<dyn Seat>, Box<dyn Seat>)
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let build = |kind: SeatKind, name: &str| -> Box<dyn Seat> {
        match kind {
            SeatKind::Human => Box::new(HumanSeat::new(name, Arc::clone(&input))),
            SeatKind::Computer => Box::new(ComputerSeat::new(name, delay)),
        }
    };
    (build(lineup.x, "Player X"), build(lineup.o, "Player O"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("5"), Action::Place(Position::Center));
        assert_eq!(parse_command(" top left "), Action::Place(Position::TopLeft));
        assert_eq!(parse_command("R"), Action::Restart);
        assert_eq!(parse_command("quit"), Action::Quit);
        assert_eq!(parse_command("0"), Action::Unrecognized("0".to_string()));
        assert_eq!(parse_command("hello"), Action::Unrecognized("hello".to_string()));
    }

    #[tokio::test]
    async fn test_computer_seat_plays_best_move() {
        let board = "XX./OO./...".parse().expect("Valid board");
        let game = Game::from_board(board).expect("Reachable board");
        let mut seat = ComputerSeat::new("Computer", Duration::ZERO);
        assert_eq!(
            seat.next_action(&game).await.expect("Search succeeds"),
            Action::Place(Position::TopRight)
        );
    }

    #[tokio::test]
    async fn test_human_seat_reads_lines_until_eof() {
        use tokio::io::AsyncBufReadExt;

        let input: SharedInput<&[u8]> = Arc::new(Mutex::new(b"7\nr\n".as_slice().lines()));
        let mut seat = HumanSeat::new("Human", input);
        let game = Game::new();
        assert_eq!(
            seat.next_action(&game).await.expect("Readable"),
            Action::Place(Position::BottomLeft)
        );
        assert_eq!(seat.next_action(&game).await.expect("Readable"), Action::Restart);
        assert_eq!(seat.next_action(&game).await.expect("Readable"), Action::Quit);
    }
}
