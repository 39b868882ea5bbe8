//! FEN import and export.
//!
//! Only the piece placement and active color fields carry meaning here.
//! Castling, en passant, and the move counters are accepted and ignored on
//! input and written as `- - 0 1` on output.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::game::Game;
use crate::piece::Piece;
use crate::position::Position;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Pawns standing off their home row are marked as moved. The result is
    /// not validated; see [`Board::validate`].
    pub fn from_fen_placement(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN ranks go from 8 to 1 (top to bottom)
            let row = 8 - rank_index as i8;
            let mut length: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    length += digit as usize;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?
                        .settled_on(row);
                    length += 1;
                    if length > 8 {
                        break;
                    }
                    board.add_piece(Position::new(row, length as i8), piece)?;
                }
            }

            if length != 8 {
                return Err(FenError::BadRankLength { rank_index, length });
            }
        }

        Ok(board)
    }
}

/// Writes the piece-placement field.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            let mut empty = 0;
            for col in 1..=8 {
                match self.get_piece(Position::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Game {
    type Err = FenError;

    /// Parse a FEN string into an active game with the given side to move.
    fn from_str(fen: &str) -> Result<Game, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let board = Board::from_fen_placement(fields[0])?;
        board.validate()?;

        let turn = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;

        Ok(Game::from_parts(turn, board))
    }
}

impl Game {
    /// Return the FEN string for this game.
    ///
    /// A finished game has no side to move and is written with `w`.
    pub fn to_fen(&self) -> String {
        let turn = self.turn().unwrap_or(Color::White);
        format!("{} {} - - 0 1", self.board(), turn.fen_char())
    }
}
