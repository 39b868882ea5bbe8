//! King move generation.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

use super::{MoveSet, gen_steps};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generate king steps to the adjacent squares. No castling.
pub(super) fn gen_king(board: &Board, from: Position, color: Color, moves: &mut MoveSet) {
    gen_steps(board, from, color, &KING_OFFSETS, moves);
}
