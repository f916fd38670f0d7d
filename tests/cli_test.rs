#![cfg(feature = "std")]

use hidden_fleet::{
    run_session, Orientation, SessionSummary, Ship, StandardBoard, StandardGame, QUIT_TOKEN,
};

fn sample_game() -> StandardGame {
    let mut board = StandardBoard::new();
    board
        .place(Ship::new(4, Orientation::Horizontal, 0, 0).unwrap())
        .unwrap();
    board
        .place(Ship::new(1, Orientation::Horizontal, 5, 5).unwrap())
        .unwrap();
    StandardGame::new(board)
}

fn play(engine: &mut StandardGame, script: &str) -> (SessionSummary, String) {
    play_bytes(engine, script.as_bytes())
}

fn play_bytes(engine: &mut StandardGame, script: &[u8]) -> (SessionSummary, String) {
    let mut out = Vec::new();
    let summary = run_session(engine, QUIT_TOKEN, script, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn test_scripted_session_transcript() {
    let mut engine = sample_game();
    let script = "0,0\n0,0\nabc\n0,1\n0,2\n0,3\n9,9\nexit\n";
    let (summary, out) = play(&mut engine, script);

    assert!(out.starts_with("Welcome to Battleship!"));
    assert!(out.contains("Hit!"));
    assert!(out.contains("Miss!"));
    assert!(out.contains("You already guessed that spot!"));
    assert!(out.contains("Invalid input. Please enter a valid guess."));
    assert_eq!(out.matches("Ship of length 4 sunk!").count(), 1);
    assert!(out.contains("1x ####"));
    assert!(out.contains("Ships left to find:\n1x #\n"));
    assert!(!out.contains("All ships sunk!"));
    assert!(out.trim_end().ends_with("Thanks for playing!"));

    assert_eq!(
        summary,
        SessionSummary {
            shots: 5,
            hits: 4,
            ships_sunk: 1,
        }
    );
}

#[test]
fn test_sinking_everything_announces_win() {
    let mut engine = sample_game();
    let (summary, out) = play(&mut engine, "0,0\n0,1\n0,2\n0,3\n5,5\nexit\n");

    assert!(out.contains("Ship of length 1 sunk!"));
    assert!(out.contains("All ships sunk! Type 'exit' to quit."));
    assert_eq!(summary.ships_sunk, 2);
}

#[test]
fn test_end_of_input_quits() {
    let mut engine = sample_game();
    let (summary, out) = play(&mut engine, "");

    assert_eq!(summary, SessionSummary::default());
    assert!(out.contains("Thanks for playing!"));
}

#[test]
fn test_line_endings_and_whitespace() {
    let mut engine = sample_game();
    let (summary, out) = play(&mut engine, "0,0\r\n 5,5\nexit");

    assert_eq!(out.matches("Hit!").count(), 1);
    assert_eq!(
        out.matches("Invalid input. Please enter a valid guess.").count(),
        1
    );
    assert_eq!(summary.shots, 1);
}

#[test]
fn test_grid_reflects_guesses() {
    let mut engine = sample_game();
    let (_, out) = play(&mut engine, "0,0\n1,0\nexit\n");

    // last rendered grid before quitting
    let grid = out.rsplit("Your guesses:").next().unwrap();
    assert!(grid.contains(" 0 | # | . |"));
    assert!(grid.contains(" 1 | O | . |"));
}

#[test]
fn test_non_utf8_line_is_reprompted() {
    let mut engine = sample_game();
    let (summary, out) = play_bytes(&mut engine, b"\xff\xfe,1\n5,5\nexit\n");

    assert_eq!(
        out.matches("Invalid input. Please enter a valid guess.").count(),
        1
    );
    assert!(out.contains("Ship of length 1 sunk!"));
    assert!(out.trim_end().ends_with("Thanks for playing!"));
    assert_eq!(summary.shots, 1);
    assert_eq!(summary.hits, 1);
}
