use arbiter::game::{Board, Color, DrawReason, GameResult, Rules, Square, new_standard_board};

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn play(board: &mut Board, notation: &str) {
    let (from, to) = notation.split_at(2);
    assert!(board.play(sq(from), sq(to)), "move {} was rejected", notation);
}

/// Both rooks step along their back rank and return, never capturing.
fn rook_shuffle(half_move: usize) -> &'static str {
    match half_move % 4 {
        0 => "a1b1",
        1 => "a8b8",
        2 => "b1a1",
        _ => "b8a8",
    }
}

fn no_repetition_draws() -> Rules {
    Rules {
        repetition_limit: u32::MAX,
        ..Rules::default()
    }
}

#[test]
fn knight_shuffle_repeats_on_the_eighth_half_move() {
    let mut board = new_standard_board();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    for (i, notation) in shuffle.iter().cycle().take(7).enumerate() {
        play(&mut board, notation);
        assert_eq!(board.result(), GameResult::InProgress, "after half-move {}", i + 1);
    }
    // g1 against f6 has now come up twice
    assert_eq!(board.repetitions(), 2);

    play(&mut board, "f6g8");
    assert_eq!(board.repetitions(), 3);
    assert_eq!(board.halfmove_clock(), 8);
    assert_eq!(board.result(), GameResult::Draw(DrawReason::Repetition));
    assert!(!board.legal_moves().is_empty());
    assert!(!board.play(sq("e2"), sq("e4")));
}

#[test]
fn fifty_quiet_half_moves_draw() {
    let mut board =
        Board::from_placement("r3k3/8/8/8/8/8/8/R3K3", Color::White, no_repetition_draws())
            .unwrap();

    for i in 0..49 {
        play(&mut board, rook_shuffle(i));
    }
    assert_eq!(board.halfmove_clock(), 49);
    assert_eq!(board.result(), GameResult::InProgress);

    play(&mut board, rook_shuffle(49));
    assert_eq!(board.halfmove_clock(), 50);
    assert_eq!(board.result(), GameResult::Draw(DrawReason::FiftyMoves));
}

#[test]
fn capture_on_the_forty_ninth_half_move_resets_the_clock() {
    let mut board =
        Board::from_placement("r3k3/8/8/8/7n/8/8/R3K2R", Color::White, no_repetition_draws())
            .unwrap();

    for i in 0..48 {
        play(&mut board, rook_shuffle(i));
    }
    assert_eq!(board.halfmove_clock(), 48);

    play(&mut board, "h1h4");
    assert_eq!(board.halfmove_clock(), 0);
    assert!(board.move_log().last().unwrap().is_capture);

    play(&mut board, "a8b8");
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.result(), GameResult::InProgress);
}

#[test]
fn pawn_moves_reset_the_clock() {
    let mut board = new_standard_board();
    play(&mut board, "g1f3");
    play(&mut board, "b8c6");
    assert_eq!(board.halfmove_clock(), 2);

    play(&mut board, "e2e3");
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn custom_fifty_move_limit() {
    let rules = Rules {
        fifty_move_limit: 4,
        ..no_repetition_draws()
    };
    let mut board = Board::from_placement("r3k3/8/8/8/8/8/8/R3K3", Color::White, rules).unwrap();

    for i in 0..3 {
        play(&mut board, rook_shuffle(i));
    }
    assert_eq!(board.result(), GameResult::InProgress);

    play(&mut board, rook_shuffle(3));
    assert_eq!(board.result(), GameResult::Draw(DrawReason::FiftyMoves));
}

#[test]
fn capturing_the_last_rook_leaves_bare_kings() {
    let mut board =
        Board::from_placement("4k3/8/8/8/8/8/3r4/4K3", Color::White, Rules::default()).unwrap();
    assert_eq!(board.result(), GameResult::InProgress);

    play(&mut board, "e1d2");
    assert_eq!(board.pieces().len(), 2);
    assert_eq!(board.result(), GameResult::Draw(DrawReason::InsufficientMaterial));
}

#[test]
fn dead_placements_are_drawn_immediately() {
    for placement in [
        "4k3/8/8/8/8/8/8/4K3",
        "4k3/8/8/8/8/8/8/1N2K1N1",
        "4kb2/8/8/8/8/8/8/1N2K3",
    ] {
        let mut board = Board::from_placement(placement, Color::White, Rules::default()).unwrap();
        assert_eq!(
            board.result(),
            GameResult::Draw(DrawReason::InsufficientMaterial),
            "{}",
            placement
        );
        assert!(!board.play(sq("e1"), sq("e2")));
    }

    let board =
        Board::from_placement("4k3/8/8/8/8/8/8/R3K3", Color::White, Rules::default()).unwrap();
    assert_eq!(board.result(), GameResult::InProgress);
}

#[test]
fn material_draws_can_be_switched_off() {
    let rules = Rules {
        insufficient_material: false,
        ..Rules::default()
    };
    let board = Board::from_placement("4k3/8/8/8/8/8/8/4K3", Color::White, rules).unwrap();
    assert_eq!(board.result(), GameResult::InProgress);
}
