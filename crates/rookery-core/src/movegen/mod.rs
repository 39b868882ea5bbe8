//! Pseudo-legal move generation.
//!
//! Generators only look at piece movement patterns and board occupancy.
//! Whether a move leaves the mover's own king in check is decided by
//! [`Game`](crate::game::Game), which replays each candidate on a scratch board.

mod king;
mod knights;
mod pawns;
mod sliders;

use std::collections::BTreeSet;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, gen_rays};

/// A set of moves. Ordered, so iteration is deterministic.
pub type MoveSet = BTreeSet<Move>;

/// Generate every pseudo-legal move for `piece` standing on `from`.
pub(crate) fn pseudo_legal_moves(piece: Piece, board: &Board, from: Position) -> MoveSet {
    let mut moves = MoveSet::new();
    let color = piece.color();

    match piece.kind() {
        PieceKind::King => gen_king(board, from, color, &mut moves),
        PieceKind::Knight => gen_knight(board, from, color, &mut moves),
        PieceKind::Bishop => gen_rays(board, from, color, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => gen_rays(board, from, color, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            gen_rays(board, from, color, &BISHOP_DIRECTIONS, &mut moves);
            gen_rays(board, from, color, &ROOK_DIRECTIONS, &mut moves);
        }
        PieceKind::Pawn => gen_pawn(board, from, color, piece.has_moved(), &mut moves),
    }

    moves
}

/// Add a one-step move for each offset that lands on the board and not on an own piece.
fn gen_steps(board: &Board, from: Position, color: Color, offsets: &[(i8, i8)], moves: &mut MoveSet) {
    for &(dr, dc) in offsets {
        let to = from.translate(dr, dc);
        if board.can_move_or_capture(to, color) {
            moves.insert(Move::new(from, to));
        }
    }
}
