//! Randomized playouts from the starting position.

use proptest::prelude::*;
use rookery_core::{Color, Game, Move, MoveError, Position, PromotionPiece};

/// Play up to `choices.len()` plies, picking each move by index into the
/// sorted legal set. Stops early when the game ends.
fn playout(choices: &[usize]) -> Vec<(Game, Move, Game)> {
    let mut game = Game::new();
    let mut history = Vec::new();
    for &choice in choices {
        let Some(turn) = game.turn() else { break };
        let legal: Vec<Move> = game.legal_moves(turn).into_iter().collect();
        if legal.is_empty() {
            break;
        }
        let mv = legal[choice % legal.len()];
        let before = game.clone();
        game.make_move(mv).unwrap();
        history.push((before, mv, game.clone()));
    }
    history
}

fn any_position() -> impl Strategy<Value = Position> {
    (1i8..=8, 1i8..=8).prop_map(|(row, col)| Position::new(row, col))
}

fn any_move() -> impl Strategy<Value = Move> {
    (
        any_position(),
        any_position(),
        prop::option::of(prop::sample::select(PromotionPiece::ALL.to_vec())),
    )
        .prop_map(|(start, end, promo)| match promo {
            Some(p) => Move::new_promotion(start, end, p),
            None => Move::new(start, end),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn turns_alternate(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        for (before, mv, after) in playout(&choices) {
            let mover = before.turn().unwrap();
            prop_assert_eq!(before.board().get_piece(mv.start()).unwrap().color(), mover);
            if !after.is_over() {
                prop_assert_eq!(after.turn(), Some(mover.flip()));
            }
        }
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        let history = playout(&choices);
        let game = history.last().map_or_else(Game::new, |(_, _, after)| after.clone());
        for color in Color::ALL {
            for (start, piece) in game.board().pieces_of(color) {
                let legal = game.valid_moves(start).unwrap();
                for mv in piece.piece_moves(game.board(), start) {
                    let mut scratch = game.board().copy_of();
                    scratch.sim_move(mv).unwrap();
                    prop_assert_eq!(legal.contains(&mv), !scratch.is_in_check(color), "{}", mv);
                }
            }
        }
    }

    #[test]
    fn rejected_moves_leave_the_game_untouched(
        choices in prop::collection::vec(any::<usize>(), 0..20),
        attempt in any_move(),
    ) {
        let history = playout(&choices);
        let mut game = history.last().map_or_else(Game::new, |(_, _, after)| after.clone());
        let before = game.clone();
        match game.make_move(attempt) {
            Ok(()) => {
                let turn = before.turn().unwrap();
                prop_assert!(before.legal_moves(turn).contains(&attempt));
            }
            Err(err) => {
                prop_assert_eq!(&game, &before);
                if before.is_over() {
                    prop_assert_eq!(err, MoveError::GameOver);
                }
            }
        }
    }

    #[test]
    fn json_roundtrip_preserves_state(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        for (_, _, after) in playout(&choices) {
            let json = after.to_json().unwrap();
            prop_assert_eq!(Game::from_json(&json).unwrap(), after);
        }
    }
}
