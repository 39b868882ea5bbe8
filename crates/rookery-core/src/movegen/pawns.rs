//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::position::Position;

use super::MoveSet;

/// Generate pawn pushes, the initial double step, and diagonal captures.
///
/// Every move landing on the promotion row expands into one move per
/// [`PromotionPiece`]. No en passant.
pub(super) fn gen_pawn(board: &Board, from: Position, color: Color, has_moved: bool, moves: &mut MoveSet) {
    let one = from.forward(color, 1);
    if board.is_vacant(one) {
        push_with_promotions(from, one, color, moves);

        let two = from.forward(color, 2);
        if !has_moved && board.is_vacant(two) {
            push_with_promotions(from, two, color, moves);
        }
    }

    for col_delta in [-1, 1] {
        let target = from.translate_relative(color, 1, col_delta);
        if board.position_blocked_by_enemy(target, color) {
            push_with_promotions(from, target, color, moves);
        }
    }
}

fn push_with_promotions(from: Position, to: Position, color: Color, moves: &mut MoveSet) {
    if to.row() == color.promotion_row() {
        for promo in PromotionPiece::ALL {
            moves.insert(Move::new_promotion(from, to, promo));
        }
    } else {
        moves.insert(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::movegen::tests::{moves_on, pos, targets};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    #[test]
    fn unmoved_pawns_single_and_double_step() {
        let board = Board::starting_position();
        for file in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            let white = moves_on(&board, &format!("{file}2"));
            assert_eq!(targets(&white), [format!("{file}3"), format!("{file}4")]);
            let black = moves_on(&board, &format!("{file}7"));
            assert_eq!(targets(&black), [format!("{file}5"), format!("{file}6")]);
        }
    }

    #[test]
    fn moved_pawn_single_step_only() {
        let mut board = Board::empty();
        board.add_piece(pos("e3"), Piece::new(Color::White, PieceKind::Pawn).moved()).unwrap();
        assert_eq!(targets(&moves_on(&board, "e3")), ["e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::starting_position();
        board.add_piece(pos("e3"), Piece::new(Color::Black, PieceKind::Knight)).unwrap();
        assert!(moves_on(&board, "e2").is_empty());

        let mut board = Board::starting_position();
        board.add_piece(pos("d4"), Piece::new(Color::Black, PieceKind::Knight)).unwrap();
        assert_eq!(targets(&moves_on(&board, "d2")), ["d3"]);
    }

    #[test]
    fn captures_are_diagonal_and_enemy_only() {
        let mut board = Board::empty();
        board.add_piece(pos("d4"), Piece::new(Color::Black, PieceKind::Pawn).moved()).unwrap();
        board.add_piece(pos("c3"), Piece::new(Color::White, PieceKind::Knight)).unwrap();
        board.add_piece(pos("e3"), Piece::new(Color::Black, PieceKind::Knight)).unwrap();
        assert_eq!(targets(&moves_on(&board, "d4")), ["c3", "d3"]);
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let mut board = Board::empty();
        board.add_piece(pos("g7"), Piece::new(Color::White, PieceKind::Pawn).moved()).unwrap();
        board.add_piece(pos("h8"), Piece::new(Color::Black, PieceKind::Rook)).unwrap();
        let moves = moves_on(&board, "g7");
        assert_eq!(moves.len(), 8);
        for promo in PromotionPiece::ALL {
            assert!(moves.contains(&Move::new_promotion(pos("g7"), pos("g8"), promo)));
            assert!(moves.contains(&Move::new_promotion(pos("g7"), pos("h8"), promo)));
        }
        assert!(!moves.contains(&Move::new(pos("g7"), pos("g8"))));
    }

    #[test]
    fn black_promotes_on_row_one() {
        let mut board = Board::empty();
        board.add_piece(pos("a2"), Piece::new(Color::Black, PieceKind::Pawn).moved()).unwrap();
        let moves = moves_on(&board, "a2");
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.end() == pos("a1") && m.promotion().is_some()));
    }
}
