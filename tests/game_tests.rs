use hidden_fleet::{
    remaining_by_length, sunk_ships, BitBoardError, BoardError, GameStatus, GuessOverlay,
    GuessResult, Mark, Orientation, Ship, StandardBoard, StandardGame, BOARD_SIZE,
};

/// A 4-long ship along the top edge and a lone 1-long ship at (5, 5).
fn sample_board() -> StandardBoard {
    let mut board = StandardBoard::new();
    board
        .place(Ship::new(4, Orientation::Horizontal, 0, 0).unwrap())
        .unwrap();
    board
        .place(Ship::new(1, Orientation::Horizontal, 5, 5).unwrap())
        .unwrap();
    board
}

#[test]
fn test_sunk_detection() {
    let board = sample_board();
    let mut overlay = GuessOverlay::<u128, BOARD_SIZE>::new();
    for (r, c) in board.ships()[0].cells() {
        overlay.record(r, c, GuessResult::Hit).unwrap();
    }

    let sunk = sunk_ships(&overlay, board.ships());
    assert_eq!(sunk, vec![&board.ships()[0]]);

    let remaining = remaining_by_length(&overlay, board.ships());
    assert_eq!(remaining.get(&4), None);
    assert_eq!(remaining.get(&1), Some(&1));
}

#[test]
fn test_partial_hits_do_not_sink() {
    let board = sample_board();
    let mut overlay = GuessOverlay::<u128, BOARD_SIZE>::new();
    overlay.record(0, 0, GuessResult::Hit).unwrap();
    overlay.record(0, 1, GuessResult::Hit).unwrap();
    overlay.record(0, 4, GuessResult::Miss).unwrap();

    assert!(sunk_ships(&overlay, board.ships()).is_empty());
    let remaining = remaining_by_length(&overlay, board.ships());
    assert_eq!(remaining.get(&4), Some(&1));
    assert_eq!(remaining.get(&1), Some(&1));
}

#[test]
fn test_sunk_check_is_idempotent() {
    let board = sample_board();
    let mut overlay = GuessOverlay::<u128, BOARD_SIZE>::new();
    for (r, c) in board.ships()[0].cells() {
        overlay.record(r, c, GuessResult::Hit).unwrap();
    }
    let before = overlay;

    let first = sunk_ships(&overlay, board.ships());
    let second = sunk_ships(&overlay, board.ships());
    assert_eq!(first, second);
    assert_eq!(overlay, before);
}

#[test]
fn test_overlay_marks() {
    let mut overlay = GuessOverlay::<u128, BOARD_SIZE>::new();
    assert_eq!(overlay.mark(3, 3).unwrap(), Mark::Unguessed);

    overlay.record(3, 3, GuessResult::Miss).unwrap();
    overlay.record(4, 4, GuessResult::Hit).unwrap();
    assert_eq!(overlay.mark(3, 3).unwrap(), Mark::Miss);
    assert_eq!(overlay.mark(4, 4).unwrap(), Mark::Hit);
    assert_eq!(overlay.guesses(), 2);
    assert_eq!(overlay.misses().iter_set_bits().collect::<Vec<_>>(), vec![(3, 3)]);
    assert_eq!(overlay.hits().iter_set_bits().collect::<Vec<_>>(), vec![(4, 4)]);

    assert_eq!(
        overlay.record(3, 3, GuessResult::Hit).unwrap_err(),
        BoardError::AlreadyGuessed
    );
    assert_eq!(overlay.mark(3, 3).unwrap(), Mark::Miss);

    assert_eq!(Mark::Unguessed.symbol(), '.');
    assert_eq!(Mark::Hit.symbol(), '#');
    assert_eq!(Mark::Miss.symbol(), 'O');
}

#[test]
fn test_engine_fire_and_repeat() {
    let mut engine = StandardGame::new(sample_board());

    assert_eq!(engine.fire(0, 2).unwrap(), GuessResult::Hit);
    assert_eq!(engine.fire(9, 9).unwrap(), GuessResult::Miss);
    assert_eq!(engine.fire(0, 2).unwrap_err(), BoardError::AlreadyGuessed);
    assert_eq!(engine.fire(9, 9).unwrap_err(), BoardError::AlreadyGuessed);
    assert_eq!(engine.guesses().guesses(), 2);
    assert!(matches!(
        engine.fire(BOARD_SIZE, 0),
        Err(BoardError::BitBoardError(BitBoardError::IndexOutOfBounds { .. }))
    ));
}

#[test]
fn test_engine_sinks_whole_fleet() {
    let mut engine = StandardGame::new(sample_board());
    assert_eq!(engine.status(), GameStatus::InProgress);

    for c in 0..3 {
        engine.fire(0, c).unwrap();
        assert!(engine.sunk_by(0, c).is_none());
    }
    engine.fire(0, 3).unwrap();
    assert_eq!(engine.sunk_by(0, 3).map(|s| s.length()), Some(4));
    assert_eq!(engine.sunk_ships().len(), 1);
    assert_eq!(engine.status(), GameStatus::InProgress);

    engine.fire(5, 5).unwrap();
    assert_eq!(engine.sunk_by(5, 5).map(|s| s.length()), Some(1));
    assert_eq!(engine.status(), GameStatus::Won);
    assert!(engine.remaining_by_length().is_empty());
}
