//! End-to-end rule checks through the public API.

use rookery_core::{Board, Color, Game, Move, MoveError, Piece, PieceKind, Position, PromotionPiece};

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for m in moves {
        game.make_move(mv(m)).unwrap_or_else(|e| panic!("{m} rejected: {e}"));
    }
}

// ── Opening state ─────────────────────────────────────────────────────────────

#[test]
fn every_white_pawn_starts_with_two_moves() {
    let game = Game::new();
    for col in 1..=8 {
        let start = Position::new(2, col);
        let moves = game.valid_moves(start).unwrap();
        assert_eq!(moves.len(), 2, "pawn on {start}");
    }
}

#[test]
fn back_rank_pieces_start_mostly_blocked() {
    let game = Game::new();
    for square in ["a1", "c1", "d1", "e1", "f1", "h1"] {
        assert!(game.valid_moves(pos(square)).unwrap().is_empty(), "{square}");
    }
    assert_eq!(game.valid_moves(pos("g1")).unwrap().len(), 2);
}

// ── Terminal states ───────────────────────────────────────────────────────────

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(game.is_in_checkmate(Color::White));
    assert!(!game.is_in_checkmate(Color::Black));
    assert!(game.is_over());
    assert_eq!(game.make_move(mv("e2e4")), Err(MoveError::GameOver));
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert!(game.is_in_check(Color::Black));
    assert!(game.is_in_checkmate(Color::Black));
    assert!(game.is_over());
    assert_eq!(game.make_move(mv("a7a6")), Err(MoveError::GameOver));
}

#[test]
fn king_and_queen_stalemate() {
    let game: Game = "k7/2Q5/8/8/8/8/8/4K3 b".parse().unwrap();
    assert!(game.is_in_stalemate(Color::Black));
    assert!(!game.is_in_check(Color::Black));
    assert!(game.legal_moves(Color::Black).is_empty());
}

#[test]
fn blocked_pawn_and_king_stalemate() {
    // Black's only pawn is blocked and the king has no safe square.
    let game: Game = "7k/5Q2/8/8/8/p7/P7/K7 b".parse().unwrap();
    assert!(!game.is_in_check(Color::Black));
    assert!(game.is_in_stalemate(Color::Black));
}

#[test]
fn back_rank_mate_from_position() {
    let mut game: Game = "6k1/5ppp/8/8/8/8/8/R5K1 w".parse().unwrap();
    game.make_move(mv("a1a8")).unwrap();
    assert!(game.is_in_checkmate(Color::Black));
    assert!(game.is_over());
}

// ── Legality filtering ────────────────────────────────────────────────────────

#[test]
fn exposing_the_king_is_rejected() {
    // The e-file knight is pinned against the white king by the black rook.
    let mut game: Game = "4r2k/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
    assert!(game.valid_moves(pos("e2")).unwrap().is_empty());

    let before = game.clone();
    let err = game.make_move(mv("e2c3")).unwrap_err();
    assert!(matches!(err, MoveError::InvalidMove { .. }));
    assert_eq!(game, before);
}

#[test]
fn must_answer_check() {
    let mut game: Game = "4k3/8/8/8/8/8/3P4/r3K3 w".parse().unwrap();
    assert!(game.is_in_check(Color::White));

    // The pawn move ignores the check.
    assert!(matches!(game.make_move(mv("d2d3")), Err(MoveError::InvalidMove { .. })));

    let escapes = game.valid_end_positions(pos("e1")).unwrap();
    assert!(escapes.contains(&pos("e2")));
    assert!(escapes.contains(&pos("f2")));
    assert!(!escapes.contains(&pos("d1")));
    assert!(!escapes.contains(&pos("f1")));
}

#[test]
fn capturing_a_defended_piece_is_legal() {
    let mut game: Game = "4k3/8/8/8/8/8/3K4/r1R5 b".parse().unwrap();
    assert!(!game.is_in_check(Color::Black));
    game.make_move(mv("a1c1")).unwrap();
    assert!(game.board().get_piece(pos("c1")).is_some_and(|p| p.color() == Color::Black));
}

// ── Rejection leaves no trace ─────────────────────────────────────────────────

#[test]
fn rejected_moves_change_nothing() {
    let mut game = Game::new();
    play(&mut game, &["d2d4", "d7d5"]);
    let before = game.clone();

    let attempts = [
        "d4d5", // blocked
        "e1e2", // own pawn
        "c8g4", // black piece on white's turn
        "h3h4", // empty square
        "b1b3", // knight shape violation
    ];
    for attempt in attempts {
        assert!(game.make_move(mv(attempt)).is_err(), "{attempt}");
        assert_eq!(game, before, "{attempt}");
        assert_eq!(game.turn(), Some(Color::White));
    }
}

#[test]
fn wrong_turn_beats_invalid_move() {
    let mut game = Game::new();
    assert_eq!(
        game.make_move(mv("g8f6")),
        Err(MoveError::WrongTurn { color: Color::Black })
    );
    assert_eq!(
        game.make_move(mv("g8g6")),
        Err(MoveError::WrongTurn { color: Color::Black })
    );
}

// ── Promotion ─────────────────────────────────────────────────────────────────

#[test]
fn promotion_to_each_piece() {
    for promo in PromotionPiece::ALL {
        let mut board = Board::empty();
        board.add_piece(pos("e1"), Piece::new(Color::White, PieceKind::King)).unwrap();
        board.add_piece(pos("a8"), Piece::new(Color::Black, PieceKind::King)).unwrap();
        board.add_piece(pos("h2"), Piece::new(Color::Black, PieceKind::Pawn).moved()).unwrap();
        let mut game = Game::from_parts(Color::Black, board);

        game.make_move(Move::new_promotion(pos("h2"), pos("h1"), promo)).unwrap();
        let promoted = game.board().get_piece(pos("h1")).unwrap();
        assert_eq!(promoted.kind(), promo.to_piece_kind());
        assert_eq!(promoted.color(), Color::Black);
    }
}

#[test]
fn promotion_by_capture() {
    let mut game: Game = "1r5k/P7/8/8/8/8/8/K7 w".parse().unwrap();
    game.make_move(mv("a7b8q")).unwrap();
    let queen = game.board().get_piece(pos("b8")).unwrap();
    assert_eq!(queen, Piece::new(Color::White, PieceKind::Queen).moved());
    assert!(game.is_in_check(Color::Black));
}

// ── Serialization ─────────────────────────────────────────────────────────────

#[test]
fn json_roundtrip_midgame() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4"]);
    let restored = Game::from_json(&game.to_json().unwrap()).unwrap();
    assert_eq!(restored, game);

    // The restored game keeps playing identically.
    let mut a = game.clone();
    let mut b = restored;
    a.make_move(mv("f3d4")).unwrap();
    b.make_move(mv("f3d4")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn json_without_moved_flags_blocks_late_double_steps() {
    let mut rows = vec!["[null,null,null,null,null,null,null,null]"; 8];
    rows[0] = r#"[null,null,null,null,{"color":"WHITE","type":"KING"},null,null,null]"#;
    rows[3] = r#"[null,null,null,null,{"color":"WHITE","type":"PAWN"},null,null,null]"#;
    rows[7] = r#"[null,null,null,null,{"color":"BLACK","type":"KING"},null,null,null]"#;
    let json = format!(r#"{{"turn":"WHITE","board":{{"squares":[{}]}}}}"#, rows.join(","));

    let mut game = Game::from_json(&json).unwrap();
    let targets = game.valid_end_positions(pos("e4")).unwrap();
    assert_eq!(targets.into_iter().collect::<Vec<_>>(), [pos("e5")]);
    assert!(matches!(game.make_move(mv("e4e6")), Err(MoveError::InvalidMove { .. })));
    game.make_move(mv("e4e5")).unwrap();
}

#[test]
fn json_wire_shape() {
    let json = Game::new().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["turn"], "WHITE");
    let squares = value["board"]["squares"].as_array().unwrap();
    assert_eq!(squares.len(), 8);
    assert_eq!(squares[0][4]["type"], "KING");
    assert_eq!(squares[0][4]["color"], "WHITE");
    assert!(squares[3][3].is_null());
    assert_eq!(squares[6][0]["type"], "PAWN");
    assert_eq!(squares[6][0]["color"], "BLACK");
}
