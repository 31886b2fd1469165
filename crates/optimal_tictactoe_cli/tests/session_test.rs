//! Tests for the interactive session loop with scripted input.

use std::sync::Arc;
use std::time::Duration;

use optimal_tictactoe::{Player, Verdict};
use optimal_tictactoe_cli::{ComputerSeat, GameMode, Lineup, Session, SharedInput, seats_for};
use tokio::io::AsyncBufReadExt;
use tokio::sync::Mutex;

/// Runs a session for `mode` over the scripted input lines.
async fn run_scripted(mode: GameMode, script: &'static str) -> (Vec<Verdict>, String) {
    let input: SharedInput<&'static [u8]> =
        Arc::new(Mutex::new(script.as_bytes().lines()));
    let lineup = mode.lineup();
    let (player_x, player_o) = seats_for(lineup, input, Duration::ZERO);

    let mut session = Session::new(lineup, player_x, player_o, Vec::new());
    session.run().await.expect("Session runs to completion");

    let finished = session.finished().to_vec();
    let output = String::from_utf8(session.into_output()).expect("UTF-8 output");
    (finished, output)
}

#[tokio::test]
async fn test_single_player_computer_wins_and_rejects_occupied_cell() {
    // X: 1, 2, (3 is taken by O), 4. O answers center, blocks, then wins.
    let (finished, output) = run_scripted(GameMode::Single, "1\n2\n3\n4\nq\n").await;

    assert_eq!(finished, vec![Verdict::Winner(Player::O)]);
    assert!(output.starts_with("Single Player: You (X) vs Computer (O)"));
    assert!(output.contains("Your Turn (X)"));
    assert!(output.contains("Computer's Turn (O)"));
    assert!(output.contains("Invalid Move!"));
    assert!(output.contains("Player O Wins!!! X Loses!"));
    assert!(output.contains("Three in a row: 3-5-7"));
    assert!(output.contains("Enter r to restart or q to quit."));
}

#[tokio::test]
async fn test_multiplayer_win_then_restart() {
    let script = "1\n4\nhello\n2\n5\n3\nr\n5\nq\n";
    let (finished, output) = run_scripted(GameMode::Multi, script).await;

    assert_eq!(finished, vec![Verdict::Winner(Player::X)]);
    assert!(output.contains("Player O's Turn"));
    assert!(output.contains("Player X Wins!!! O Loses!"));
    assert!(output.contains("Three in a row: 1-2-3"));
    assert!(output.contains("Enter a cell number 1-9, r to restart or q to quit."));
    assert_eq!(output.matches("Multiplayer: Player X vs Player O").count(), 2);
}

#[tokio::test]
async fn test_restart_mid_game() {
    let (finished, output) = run_scripted(GameMode::Multi, "5\nr\nq\n").await;

    assert!(finished.is_empty());
    assert_eq!(output.matches("Multiplayer: Player X vs Player O").count(), 2);
}

#[tokio::test]
async fn test_end_of_input_quits() {
    let (finished, output) = run_scripted(GameMode::Single, "").await;

    assert!(finished.is_empty());
    assert!(output.contains("Your Turn (X)"));
}

#[tokio::test]
async fn test_selfplay_draws() {
    let mut session = Session::new(
        Lineup::computers(),
        Box::new(ComputerSeat::new("Computer X", Duration::ZERO)),
        Box::new(ComputerSeat::new("Computer O", Duration::ZERO)),
        Vec::new(),
    );
    session.run().await.expect("Self-play completes");

    assert_eq!(session.finished(), &[Verdict::Draw]);
    let output = String::from_utf8(session.into_output()).expect("UTF-8 output");
    assert!(output.starts_with("Computer (X) vs Computer (O)"));
    assert!(output.contains("Draw!"));
    assert!(!output.contains("Three in a row"));
}

#[tokio::test(start_paused = true)]
async fn test_computer_delay_completes_move() {
    let input: SharedInput<&'static [u8]> = Arc::new(Mutex::new(b"5\nq\n".as_slice().lines()));
    let lineup = GameMode::Single.lineup();
    let (player_x, player_o) = seats_for(lineup, input, Duration::from_millis(500));

    let mut session = Session::new(lineup, player_x, player_o, Vec::new());
    session.run().await.expect("Session runs to completion");

    let output = String::from_utf8(session.into_output()).expect("UTF-8 output");
    // X took the center; the computer's reply shows up before X is asked again.
    assert!(output.contains("O|2|3"));
}
