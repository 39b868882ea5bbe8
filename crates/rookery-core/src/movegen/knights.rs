//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

use super::{MoveSet, gen_steps};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// Generate knight jumps. Intervening squares are never inspected.
pub(super) fn gen_knight(board: &Board, from: Position, color: Color, moves: &mut MoveSet) {
    gen_steps(board, from, color, &KNIGHT_OFFSETS, moves);
}
