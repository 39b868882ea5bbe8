//! Board coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A (row, column) coordinate. Row 1 is White's back rank, column 1 is the a-file.
///
/// Positions are plain values and may lie off the board; anything derived
/// by translation must be checked with [`Position::in_bounds`] before use.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Lowest valid row or column.
    pub const MIN: i8 = 1;
    /// Highest valid row or column.
    pub const MAX: i8 = 8;

    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return `true` if both coordinates are within 1..=8.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= Self::MIN && self.row <= Self::MAX && self.col >= Self::MIN && self.col <= Self::MAX
    }

    /// Shift by `n` rows toward `color`'s opponent.
    #[inline]
    pub const fn forward(self, color: Color, n: i8) -> Position {
        Position::new(self.row + color.forward_sign() * n, self.col)
    }

    #[inline]
    pub const fn translate(self, row_delta: i8, col_delta: i8) -> Position {
        Position::new(self.row + row_delta, self.col + col_delta)
    }

    /// Translate with the row delta read from `color`'s point of view.
    ///
    /// `translate_relative(Color::Black, 1, -1)` moves one row toward rank 1.
    #[inline]
    pub const fn translate_relative(self, color: Color, row_delta: i8, col_delta: i8) -> Position {
        self.translate(color.forward_sign() * row_delta, col_delta)
    }

    /// Zero-based grid indices, or `None` off the board.
    #[inline]
    pub(crate) fn grid_index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some(((self.row - 1) as usize, (self.col - 1) as usize))
        } else {
            None
        }
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Position::new((rank_byte - b'0') as i8, (file_byte - b'a') as i8 + 1))
    }

    /// Iterate over all 64 on-board positions, row by row from a1 to h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (Self::MIN..=Self::MAX).flat_map(|row| (Self::MIN..=Self::MAX).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file = (b'a' + (self.col - 1) as u8) as char;
            write!(f, "{}{}", file, self.row)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}
