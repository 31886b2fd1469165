//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use optimal_tictactoe_cli::{
    AppConfig, Cli, Command, ComputerSeat, Lineup, Session, analyze, hint, seats_for,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = AppConfig::load(cli.config.as_deref())?;
            run_play(config).await
        }
        Some(Command::Play { mode, delay_ms }) => {
            let config = AppConfig::load(cli.config.as_deref())?.with_overrides(mode, delay_ms);
            run_play(config).await
        }
        Some(Command::Hint { board }) => {
            println!("{}", hint(&board)?);
            Ok(())
        }
        Some(Command::Analyze { board, json }) => {
            let analysis = analyze(&board)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", analysis.to_text());
            }
            Ok(())
        }
        Some(Command::Selfplay { delay_ms }) => run_selfplay(delay_ms).await,
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config), fields(mode = %config.mode()))]
async fn run_play(config: AppConfig) -> Result<()> {
    info!(delay_ms = config.computer_delay_ms(), "Starting interactive play");

    let input = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
    let lineup = config.mode().lineup();
    let (player_x, player_o) = seats_for(lineup, input, config.computer_delay());

    let mut session = Session::new(lineup, player_x, player_o, tokio::io::stdout());
    session.run().await
}

/// Let the engine play itself once
#[instrument]
async fn run_selfplay(delay_ms: u64) -> Result<()> {
    let delay = Duration::from_millis(delay_ms);
    let mut session = Session::new(
        Lineup::computers(),
        Box::new(ComputerSeat::new("Computer X", delay)),
        Box::new(ComputerSeat::new("Computer O", delay)),
        tokio::io::stdout(),
    );
    session.run().await?;

    if let Some(verdict) = session.finished().first() {
        info!(%verdict, "Self-play finished");
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,optimal_tictactoe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
