//! Tests for the game board: construction, move legality, win detection.

use hanoi_engine::{
    DISC_COLORS, DISC_HEIGHT, Disc, EmptyTowerError, GameBoard, GamePhase, MAX_DISCS, MIN_DISCS,
    MoveError, TOWER_HEIGHT, TOWER_WIDTH, Tower, ValidationError,
};

fn disc(id: &str, width: u32) -> Disc {
    Disc::new(id, width, 15, "Green").unwrap()
}

fn tower(id: &str, is_initial: bool) -> Tower {
    Tower::new(id, is_initial, 165, 145, "DodgerBlue").unwrap()
}

/// Board with discs 50 > 40 > 30 stacked on towerA (disc30 on top).
fn three_disc_board() -> GameBoard {
    let mut initial = tower("towerA", true);
    initial.add_top_disc(disc("disc50", 50)).unwrap();
    initial.add_top_disc(disc("disc40", 40)).unwrap();
    initial.add_top_disc(disc("disc30", 30)).unwrap();
    GameBoard::new([initial, tower("towerB", false), tower("towerC", false)]).unwrap()
}

fn one_disc_board() -> GameBoard {
    let mut initial = tower("towerA", true);
    initial.add_top_disc(disc("disc30", 30)).unwrap();
    GameBoard::new([initial, tower("towerB", false), tower("towerC", false)]).unwrap()
}

fn widths_of(board: &GameBoard, id: &str) -> Vec<u32> {
    board
        .tower(id)
        .unwrap()
        .discs()
        .iter()
        .map(|d| *d.width())
        .collect()
}

#[test]
fn test_standard_board_shape() {
    let board = GameBoard::standard(3).unwrap();

    assert_eq!(board.number_of_discs(), 3);
    assert_eq!(board.minimum_moves(), 7);
    assert_eq!(board.initial_tower().id(), "towerA");
    assert_eq!(board.goal_tower().id(), "towerC");

    // Widest at the bottom, 15 px steps.
    assert_eq!(widths_of(&board, "towerA"), vec![60, 45, 30]);
    assert!(!board.tower("towerB").unwrap().has_disc());
    assert!(!board.tower("towerC").unwrap().has_disc());

    let top = board.tower("towerA").unwrap().top_disc().unwrap().clone();
    assert_eq!(top.id(), "disc1");
    assert_eq!(top.color(), DISC_COLORS[0]);
    assert_eq!(*top.height(), DISC_HEIGHT);

    let goal = board.goal_tower();
    assert_eq!(goal.width(), TOWER_WIDTH);
    assert_eq!(goal.height(), TOWER_HEIGHT);
}

#[test]
fn test_standard_rejects_out_of_range_counts() {
    assert_eq!(
        GameBoard::standard(MIN_DISCS - 1).unwrap_err(),
        ValidationError::DiscCountOutOfRange {
            count: 2,
            min: MIN_DISCS,
            max: MAX_DISCS,
        }
    );
    assert!(GameBoard::standard(MAX_DISCS + 1).is_err());
    assert!(GameBoard::standard(MAX_DISCS).is_ok());
}

#[test]
fn test_board_rejects_duplicate_tower_ids() {
    let err = GameBoard::new([
        tower("towerA", true),
        tower("towerB", false),
        tower("towerB", false),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateTowerId {
            id: "towerB".to_string(),
        }
    );
}

#[test]
fn test_board_requires_exactly_one_initial_tower() {
    let err = GameBoard::new([
        tower("towerA", false),
        tower("towerB", false),
        tower("towerC", false),
    ])
    .unwrap_err();
    assert_eq!(err, ValidationError::InitialTowerCount { count: 0 });

    let err = GameBoard::new([
        tower("towerA", true),
        tower("towerB", true),
        tower("towerC", false),
    ])
    .unwrap_err();
    assert_eq!(err, ValidationError::InitialTowerCount { count: 2 });
}

#[test]
fn test_board_rejects_initial_goal_tower() {
    let err = GameBoard::new([
        tower("towerA", false),
        tower("towerB", false),
        tower("towerC", true),
    ])
    .unwrap_err();
    assert_eq!(err, ValidationError::GoalTowerIsInitial);
}

#[test]
fn test_board_rejects_too_many_discs() {
    let mut initial = tower("towerA", true);
    for i in 0u32..9 {
        initial.add_top_disc(disc(&format!("d{i}"), 100 - 5 * i)).unwrap();
    }
    let err =
        GameBoard::new([initial, tower("towerB", false), tower("towerC", false)]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooManyDiscs {
            count: 9,
            max: MAX_DISCS,
        }
    );
}

#[test]
fn test_seven_move_solution_wins() {
    let mut board = three_disc_board();
    let moves = [
        ("towerA", "towerC"),
        ("towerA", "towerB"),
        ("towerC", "towerB"),
        ("towerA", "towerC"),
        ("towerB", "towerA"),
        ("towerB", "towerC"),
        ("towerA", "towerC"),
    ];

    for (i, (from, to)) in moves.iter().enumerate() {
        assert!(!board.is_winner(), "won early at move {i}");
        board.move_disc(from, to).unwrap();
    }

    assert!(board.is_winner());
    assert_eq!(board.number_of_moves(), 7);
    assert_eq!(board.minimum_moves(), 7);
    assert_eq!(board.phase(), GamePhase::Won);
    assert_eq!(widths_of(&board, "towerC"), vec![50, 40, 30]);

    // A winning move stamps the clock.
    assert!(board.end_time() > 0);
    assert!(board.winning_time().is_some());
}

#[test]
fn test_illegal_move_leaves_towers_unchanged() {
    let mut board = three_disc_board();
    board.move_disc("towerA", "towerB").unwrap(); // disc30 to B

    let before_a = widths_of(&board, "towerA");
    let before_b = widths_of(&board, "towerB");

    // disc40 cannot rest on disc30.
    let err = board.move_disc("towerA", "towerB").unwrap_err();
    match err {
        MoveError::DiscTooLarge {
            disc,
            resting_width,
        } => {
            assert_eq!(disc.id(), "disc40");
            assert_eq!(resting_width, 30);
        }
        other => panic!("Expected DiscTooLarge, got {other:?}"),
    }

    assert_eq!(widths_of(&board, "towerA"), before_a);
    assert_eq!(widths_of(&board, "towerB"), before_b);
    assert_eq!(board.number_of_moves(), 1);
}

#[test]
fn test_move_from_empty_tower_errors() {
    let mut board = three_disc_board();
    let err = board.move_disc("towerB", "towerC").unwrap_err();
    assert_eq!(
        err,
        MoveError::EmptyTower(EmptyTowerError {
            tower: "towerB".to_string(),
        })
    );
    assert_eq!(board.number_of_moves(), 0);
}

#[test]
fn test_unknown_tower_errors() {
    let mut board = three_disc_board();
    assert_eq!(
        board.move_disc("towerA", "towerD").unwrap_err(),
        MoveError::UnknownTower {
            id: "towerD".to_string(),
        }
    );
    assert!(board.tower("towerD").is_err());
}

#[test]
fn test_self_move_is_a_noop() {
    let mut board = three_disc_board();
    let before = widths_of(&board, "towerA");

    board.move_disc("towerA", "towerA").unwrap();

    assert_eq!(widths_of(&board, "towerA"), before);
    assert_eq!(board.number_of_moves(), 0);
}

#[test]
fn test_round_trip_restores_both_towers() {
    let mut board = three_disc_board();
    let before_a = board.tower("towerA").unwrap().discs().to_vec();
    let before_b = board.tower("towerB").unwrap().discs().to_vec();

    board.move_disc("towerA", "towerB").unwrap();
    board.move_disc("towerB", "towerA").unwrap();

    assert_eq!(board.tower("towerA").unwrap().discs(), before_a.as_slice());
    assert_eq!(board.tower("towerB").unwrap().discs(), before_b.as_slice());
    assert_eq!(board.number_of_moves(), 2);
}

#[test]
fn test_moves_rejected_once_game_is_over() {
    let mut board = one_disc_board();
    board.move_disc("towerA", "towerC").unwrap();
    assert!(board.is_winner());

    assert_eq!(
        board.move_disc("towerC", "towerA").unwrap_err(),
        MoveError::GameOver
    );
    assert_eq!(board.number_of_moves(), 1);
}

#[test]
fn test_moves_rejected_after_giving_up() {
    let mut board = three_disc_board();
    board.set_start_time(1_000);
    board.move_disc("towerA", "towerC").unwrap();

    // External reset force-ends the session.
    board.set_end_time(2_000);
    assert_eq!(board.phase(), GamePhase::Abandoned);
    assert_eq!(
        board.move_disc("towerA", "towerB").unwrap_err(),
        MoveError::GameOver
    );
}

#[test]
fn test_phase_follows_the_timers() {
    let mut board = three_disc_board();
    assert_eq!(board.phase(), GamePhase::NotStarted);

    board.set_start_time(1_000);
    assert_eq!(board.phase(), GamePhase::InProgress);

    board.set_end_time(5_000);
    assert_eq!(board.phase(), GamePhase::Abandoned);
}

#[test]
fn test_disc_count_adjustment_before_start() {
    let mut board = GameBoard::standard(3).unwrap();

    board.increment_number_of_discs().unwrap();
    board.add_bottom_disc(disc("disc4", 75)).unwrap();
    assert_eq!(board.number_of_discs(), 4);
    assert_eq!(board.initial_tower().disc_count(), 4);
    assert!(board.check_invariants().is_ok());
    assert_eq!(board.minimum_moves(), 15);

    let removed = board.remove_bottom_disc().unwrap();
    board.decrement_number_of_discs().unwrap();
    assert_eq!(removed.id(), "disc4");
    assert_eq!(board.number_of_discs(), 3);
    assert!(board.check_invariants().is_ok());
}

#[test]
fn test_disc_count_adjustment_bounds() {
    let mut board = GameBoard::standard(MAX_DISCS).unwrap();
    assert_eq!(
        board.increment_number_of_discs().unwrap_err(),
        MoveError::AtMaxDiscs { max: MAX_DISCS }
    );

    let mut board = GameBoard::standard(MIN_DISCS).unwrap();
    assert_eq!(
        board.decrement_number_of_discs().unwrap_err(),
        MoveError::AtMinDiscs { min: MIN_DISCS }
    );
}

#[test]
fn test_disc_count_adjustment_locked_after_start() {
    let mut board = GameBoard::standard(3).unwrap();
    board.set_start_time(1_000);

    assert_eq!(
        board.increment_number_of_discs().unwrap_err(),
        MoveError::AdjustAfterStart
    );
    assert_eq!(
        board.decrement_number_of_discs().unwrap_err(),
        MoveError::AdjustAfterStart
    );
    assert_eq!(
        board.add_bottom_disc(disc("late", 200)).unwrap_err(),
        MoveError::AdjustAfterStart
    );
    assert_eq!(
        board.remove_bottom_disc().unwrap_err(),
        MoveError::AdjustAfterStart
    );
}

#[test]
fn test_selection_slots() {
    let mut board = three_disc_board();
    assert!(board.selected_disc().is_none());
    assert!(board.destination_tower().is_none());

    let top = board.tower("towerA").unwrap().top_disc().unwrap().clone();
    board.set_selected_disc(Some(top.clone()));
    assert_eq!(board.selected_disc(), Some(&top));

    board.set_destination_tower(Some("towerC".to_string())).unwrap();
    assert_eq!(board.destination_tower(), Some("towerC"));

    assert_eq!(
        board
            .set_destination_tower(Some("towerZ".to_string()))
            .unwrap_err(),
        MoveError::UnknownTower {
            id: "towerZ".to_string(),
        }
    );
    // A rejected mark leaves the previous one in place.
    assert_eq!(board.destination_tower(), Some("towerC"));

    board.set_selected_disc(None);
    board.set_destination_tower(None).unwrap();
    assert!(board.selected_disc().is_none());
    assert!(board.destination_tower().is_none());
}

#[test]
fn test_restart_restacks_the_initial_tower() {
    let mut board = three_disc_board();
    board.set_start_time(1_000);
    board.move_disc("towerA", "towerC").unwrap();
    board.move_disc("towerA", "towerB").unwrap();

    board.restart();

    assert_eq!(board.phase(), GamePhase::NotStarted);
    assert_eq!(board.number_of_moves(), 0);
    assert_eq!(board.start_time(), 0);
    assert_eq!(board.end_time(), 0);
    assert_eq!(widths_of(&board, "towerA"), vec![50, 40, 30]);
    assert!(!board.tower("towerB").unwrap().has_disc());
    assert!(!board.tower("towerC").unwrap().has_disc());
    assert!(board.check_invariants().is_ok());
}
