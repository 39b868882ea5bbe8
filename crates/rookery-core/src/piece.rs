//! Colored pieces.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{self, MoveSet};
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A colored piece together with its "has moved" flag.
///
/// `Piece` is a `Copy` value: boards store pieces by value, so updating the
/// flag on one board can never be observed through another.
///
/// Equality and hashing look at color and kind only. The flag is movement
/// history, not identity.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    #[serde(rename = "type")]
    kind: PieceKind,
    /// Only pawns consult this (double-step eligibility).
    #[serde(rename = "hasMoved", default)]
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return a copy of this piece with the moved flag set.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Return a copy of this piece with a different kind, keeping color and flag.
    #[inline]
    pub const fn promoted(self, kind: PieceKind) -> Piece {
        Piece { kind, ..self }
    }

    /// Infer the flag for a piece found on `row` with no recorded history.
    ///
    /// A pawn off its starting row must have moved. Other pieces are left as is.
    pub(crate) fn settled_on(self, row: i8) -> Piece {
        if self.kind == PieceKind::Pawn && row != self.color.pawn_row() {
            self.moved()
        } else {
            self
        }
    }

    /// Parse a FEN character: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// Return the FEN character for this piece.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Every move this piece could make from `position` on `board`,
    /// without regard to whether its own king is left in check.
    pub fn piece_moves(self, board: &Board, position: Position) -> MoveSet {
        movegen::pseudo_legal_moves(self, board, position)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Piece) -> bool {
        self.color == other.color && self.kind == other.kind
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.fen_char().to_ascii_uppercase();
        if self.has_moved {
            write!(f, "{color_prefix}{kind_char}'")
        } else {
            write!(f, "{color_prefix}{kind_char}")
        }
    }
}
