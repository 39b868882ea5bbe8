//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

use super::MoveSet;

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walk each direction outward from `from` until the edge or a piece.
///
/// Empty squares are added; an enemy square is added as a capture and ends
/// the ray; an own piece ends the ray without being added.
pub(super) fn gen_rays(board: &Board, from: Position, color: Color, directions: &[(i8, i8)], moves: &mut MoveSet) {
    for &(dr, dc) in directions {
        let mut to = from.translate(dr, dc);
        while to.in_bounds() {
            match board.get_piece(to) {
                None => {
                    moves.insert(Move::new(from, to));
                }
                Some(piece) => {
                    if piece.color() != color {
                        moves.insert(Move::new(from, to));
                    }
                    break;
                }
            }
            to = to.translate(dr, dc);
        }
    }
}
