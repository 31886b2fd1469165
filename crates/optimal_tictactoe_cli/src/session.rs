//! Game orchestration between seats.

use anyhow::Result;
use optimal_tictactoe::{Game, MoveError, Player, Verdict};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::mode::{Lineup, SeatKind};
use crate::seats::{Action, Seat};
use crate::status;

const HELP: &str = "Enter a cell number 1-9, r to restart or q to quit.";

/// Drives games between two seats, writing the board and status to `out`.
pub struct Session<W> {
    lineup: Lineup,
    game: Game,
    player_x: Box<dyn Seat>,
    player_o: Box<dyn Seat>,
    out: W,
    finished: Vec<Verdict>,
}

impl<W> Session<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a session. The seats must match `lineup`.
    pub fn new(
        lineup: Lineup,
        player_x: Box<dyn Seat>,
        player_o: Box<dyn Seat>,
        out: W,
    ) -> Self {
        Self {
            lineup,
            game: Game::new(),
            player_x,
            player_o,
            out,
            finished: Vec::new(),
        }
    }

    /// Verdicts of the games completed so far.
    pub fn finished(&self) -> &[Verdict] {
        &self.finished
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays games until a seat quits or input runs out.
    ///
    /// Without a human seat a single game is played.
    #[instrument(skip(self), fields(lineup = ?self.lineup))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting session");
        self.announce_new_game().await?;

        loop {
            let Some(player) = self.game.to_move() else {
                self.finished.push(self.game.outcome());
                if !self.ask_restart().await? {
                    info!(games = self.finished.len(), "Session finished");
                    return Ok(());
                }
                self.game.reset();
                self.announce_new_game().await?;
                continue;
            };

            let seat = match player {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            debug!(seat = %seat.name(), "Waiting for move");
            let action = seat.next_action(&self.game).await?;

            match action {
                Action::Place(position) => match self.game.place(position) {
                    Ok(_) => self.show_board().await?,
                    Err(MoveError::SquareOccupied(_)) => {
                        warn!(position = %position, "Occupied square chosen");
                        self.say("Invalid Move!").await?;
                    }
                    Err(err) => return Err(err.into()),
                },
                Action::Restart => {
                    info!("Restart requested");
                    self.game.reset();
                    self.announce_new_game().await?;
                }
                Action::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Action::Unrecognized(text) => {
                    debug!(input = %text, "Unrecognized input");
                    self.say(HELP).await?;
                }
            }
        }
    }

    /// Asks a human seat whether to play again. Returns false to stop.
    async fn ask_restart(&mut self) -> Result<bool> {
        if !self.lineup.has_human() {
            return Ok(false);
        }
        let seat = match self.lineup.x {
            SeatKind::Human => &mut self.player_x,
            SeatKind::Computer => &mut self.player_o,
        };

        let prompt = "Enter r to restart or q to quit.";
        self.out.write_all(prompt.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;

        loop {
            match seat.next_action(&self.game).await? {
                Action::Restart => return Ok(true),
                Action::Quit => return Ok(false),
                Action::Place(_) | Action::Unrecognized(_) => {
                    self.out.write_all(prompt.as_bytes()).await?;
                    self.out.write_all(b"\n").await?;
                    self.out.flush().await?;
                }
            }
        }
    }

    async fn announce_new_game(&mut self) -> Result<()> {
        let title = status::title(self.lineup);
        self.say(&title).await?;
        self.show_board().await
    }

    async fn show_board(&mut self) -> Result<()> {
        let mut text = format!(
            "\n{}\n\n{}",
            self.game.board().display(),
            status::status(self.lineup, self.game.phase())
        );
        if let Some(line) = status::winning_cells(self.game.board()) {
            text.push('\n');
            text.push_str(&line);
        }
        self.say(&text).await
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}
