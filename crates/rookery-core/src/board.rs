//! The board: an 8x8 grid of optional pieces, plus check detection.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Back-rank layout, column 1 to column 8.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on an 8x8 grid.
///
/// `squares[row - 1][col - 1]` holds the piece on `Position::new(row, col)`.
/// The board is `Copy`: a copy shares nothing with its source, which is what
/// makes it safe to use as a scratch board for legality simulation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "BoardRecord")]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// A board as read off the wire, where `hasMoved` may be absent.
#[derive(Deserialize)]
struct BoardRecord {
    squares: [[Option<PieceRecord>; 8]; 8],
}

#[derive(Deserialize)]
struct PieceRecord {
    color: Color,
    #[serde(rename = "type")]
    kind: PieceKind,
    #[serde(rename = "hasMoved")]
    has_moved: Option<bool>,
}

impl From<BoardRecord> for Board {
    fn from(record: BoardRecord) -> Board {
        let mut board = Board::empty();
        for (row_index, row) in record.squares.into_iter().enumerate() {
            for (col_index, square) in row.into_iter().enumerate() {
                board.squares[row_index][col_index] = square.map(|p| {
                    let piece = Piece::new(p.color, p.kind);
                    match p.has_moved {
                        Some(true) => piece.moved(),
                        Some(false) => piece,
                        None => piece.settled_on(row_index as i8 + 1),
                    }
                });
            }
        }
        board
    }
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Clear the board and set up the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(Color::White, kind));
            self.squares[1][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            self.squares[6][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            self.squares[7][col] = Some(Piece::new(Color::Black, kind));
        }
    }

    /// Return the piece at `position`, if any. Off-board positions are empty.
    #[inline]
    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        let (row, col) = position.grid_index()?;
        self.squares[row][col]
    }

    /// Place `piece` on an empty, on-board square.
    pub fn add_piece(&mut self, position: Position, piece: Piece) -> Result<(), BoardError> {
        let (row, col) = position.grid_index().ok_or(BoardError::OutOfBounds { position })?;
        let square = &mut self.squares[row][col];
        if square.is_some() {
            return Err(BoardError::SquareOccupied { position });
        }
        *square = Some(piece);
        Ok(())
    }

    /// Remove and return the piece at `position`, if any.
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        let (row, col) = position.grid_index()?;
        self.squares[row][col].take()
    }

    /// Return an independent snapshot of this board.
    #[inline]
    pub fn copy_of(&self) -> Board {
        *self
    }

    /// Overwrite this board with the contents of `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Board) {
        self.squares = source.squares;
    }

    /// Apply `mv` authoritatively: relocate the piece, apply any promotion,
    /// and mark it as moved. Returns the captured piece, if any.
    ///
    /// No legality checking happens here; that is [`Game`](crate::game::Game)'s job.
    pub fn do_move(&mut self, mv: Move) -> Result<Option<Piece>, BoardError> {
        self.relocate(mv, true)
    }

    /// Apply `mv` on a scratch board for a check test. Promotion is ignored
    /// because the promoted kind cannot change whether the mover is in check.
    pub fn sim_move(&mut self, mv: Move) -> Result<Option<Piece>, BoardError> {
        self.relocate(mv, false)
    }

    fn relocate(&mut self, mv: Move, promote: bool) -> Result<Option<Piece>, BoardError> {
        let (start_row, start_col) = mv
            .start()
            .grid_index()
            .ok_or(BoardError::OutOfBounds { position: mv.start() })?;
        let (end_row, end_col) = mv
            .end()
            .grid_index()
            .ok_or(BoardError::OutOfBounds { position: mv.end() })?;

        let piece = self.squares[start_row][start_col].ok_or(BoardError::EmptySquare { position: mv.start() })?;

        let mut placed = piece.moved();
        if promote && let Some(promo) = mv.promotion() {
            placed = placed.promoted(promo.to_piece_kind());
        }

        self.squares[start_row][start_col] = None;
        Ok(self.squares[end_row][end_col].replace(placed))
    }

    /// Return `true` if `position` is on the board and holds a piece of the other color.
    #[inline]
    pub fn position_blocked_by_enemy(&self, position: Position, color: Color) -> bool {
        self.get_piece(position).is_some_and(|p| p.color() != color)
    }

    /// Return `true` if a `color` piece could land on `position`: on the board
    /// and either empty or enemy-occupied.
    #[inline]
    pub fn can_move_or_capture(&self, position: Position, color: Color) -> bool {
        position.in_bounds() && self.get_piece(position).is_none_or(|p| p.color() != color)
    }

    /// Return `true` if `position` is on the board and empty.
    #[inline]
    pub fn is_vacant(&self, position: Position) -> bool {
        position.in_bounds() && self.get_piece(position).is_none()
    }

    /// Iterate over every occupied square, row by row from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }

    /// Iterate over the squares holding `color`'s pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of `color`'s king, scanning the whole board.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Return `true` if any `by_color` piece has a pseudo-legal move ending on `target`.
    pub fn is_attacked(&self, target: Position, by_color: Color) -> bool {
        self.pieces_of(by_color)
            .any(|(pos, piece)| piece.piece_moves(self, pos).iter().any(|mv| mv.end() == target))
    }

    /// Return `true` if `color`'s king is attacked. A board without that king
    /// is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_position(color) {
            Some(king) => self.is_attacked(king, color.flip()),
            None => false,
        }
    }

    /// Validate that the board describes a playable position.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(pos, piece)| {
            piece.kind() == PieceKind::Pawn && (pos.row() == Position::MIN || pos.row() == Position::MAX)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper with White at the bottom.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            perspective: Color::White,
            highlights: None,
        }
    }

    /// Return a pretty-printable wrapper seen from `perspective`, marking `highlights`.
    pub fn pretty_from<'a>(&'a self, perspective: Color, highlights: &'a BTreeSet<Position>) -> PrettyBoard<'a> {
        PrettyBoard {
            board: self,
            perspective,
            highlights: Some(highlights),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
///
/// Squares show the piece letter (uppercase White, lowercase Black) or `.`;
/// highlighted squares are followed by `*`.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    perspective: Color,
    highlights: Option<&'a BTreeSet<Position>>,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols): (Vec<i8>, Vec<i8>) = match self.perspective {
            Color::White => ((1..=8).rev().collect(), (1..=8).collect()),
            Color::Black => ((1..=8).collect(), (1..=8).rev().collect()),
        };

        for &row in &rows {
            let mut line = format!("{row}  ");
            for &col in &cols {
                let pos = Position::new(row, col);
                let c = self.board.get_piece(pos).map_or('.', Piece::fen_char);
                let marked = self.highlights.is_some_and(|h| h.contains(&pos));
                line.push(c);
                line.push(if marked { '*' } else { ' ' });
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        let files: Vec<String> = cols
            .iter()
            .map(|&col| ((b'a' + (col - 1) as u8) as char).to_string())
            .collect();
        write!(f, "   {}", files.join(" "))
    }
}
