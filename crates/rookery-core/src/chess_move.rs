//! Move representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveParseError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionPiece {
    Queen,
    Bishop,
    Knight,
    Rook,
}

impl PromotionPiece {
    /// All promotion pieces.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
        PromotionPiece::Rook,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Return the coordinate-notation suffix for this promotion.
    pub const fn notation_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    /// Parse a promotion suffix (case-insensitive).
    pub fn from_notation_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }
}

/// A move from one position to another, with an optional promotion piece.
///
/// Equality covers all three fields, so `e7e8q` and `e7e8n` are distinct.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    start_position: Position,
    end_position: Position,
    promotion_piece: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without promotion.
    pub const fn new(start: Position, end: Position) -> Move {
        Move {
            start_position: start,
            end_position: end,
            promotion_piece: None,
        }
    }

    /// Create a promotion move.
    pub const fn new_promotion(start: Position, end: Position, promo: PromotionPiece) -> Move {
        Move {
            start_position: start,
            end_position: end,
            promotion_piece: Some(promo),
        }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start_position
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end_position
    }

    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion_piece
    }

    /// Return the coordinate-notation string, e.g. `e2e4` or `e7e8q`.
    pub fn to_notation(self) -> String {
        self.to_string()
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation: `e2e4`, or `e7e8q` for a promotion.
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::BadLength { found: s.to_string() });
        }

        let start = Position::from_algebraic(&s[0..2])
            .ok_or_else(|| MoveParseError::BadSquare { found: s[0..2].to_string() })?;
        let end = Position::from_algebraic(&s[2..4])
            .ok_or_else(|| MoveParseError::BadSquare { found: s[2..4].to_string() })?;

        match s[4..].chars().next() {
            None => Ok(Move::new(start, end)),
            Some(c) => {
                let promo = PromotionPiece::from_notation_char(c)
                    .ok_or(MoveParseError::BadPromotion { character: c })?;
                Ok(Move::new_promotion(start, end, promo))
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion_piece {
            Some(promo) => write!(f, "{}{}{}", self.start_position, self.end_position, promo.notation_char()),
            None => write!(f, "{}{}", self.start_position, self.end_position),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
