//! Error types for move submission, board editing, and parsing.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

/// Why a submitted move is not in the legal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// There is no piece on the start square.
    EmptySquare,
    /// The piece cannot make this move, or making it would leave its king in check.
    NotLegal,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::EmptySquare => write!(f, "no piece on the start square"),
            InvalidMoveReason::NotLegal => write!(f, "not a legal move for that piece"),
        }
    }
}

/// Errors returned when a move or resignation is rejected.
///
/// A rejected call never modifies the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not a member of the legal set for the piece on its start square.
    #[error("invalid move {mv}: {reason}")]
    InvalidMove {
        /// The rejected move.
        mv: Move,
        /// What was wrong with it.
        reason: InvalidMoveReason,
    },
    /// The piece belongs to the side that does not hold the turn.
    #[error("it is not {color}'s turn")]
    WrongTurn {
        /// The side that tried to move.
        color: Color,
    },
    /// The game has already ended.
    #[error("the game is already over")]
    GameOver,
    /// The submitting identity is not seated in the game.
    #[error("{username} is not playing this game")]
    NonexistentPlayer {
        /// The unknown identity.
        username: String,
    },
}

/// Errors from parsing coordinate move notation such as `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The string is not 4 or 5 ASCII characters.
    #[error("expected a move like e2e4 or e7e8q, found \"{found}\"")]
    BadLength {
        /// The input.
        found: String,
    },
    /// A square is not valid algebraic notation.
    #[error("invalid square: \"{found}\"")]
    BadSquare {
        /// The offending square text.
        found: String,
    },
    /// The promotion suffix is not one of `q`, `r`, `b`, `n`.
    #[error("invalid promotion piece: '{character}'")]
    BadPromotion {
        /// The offending suffix.
        character: char,
    },
}

/// Errors from editing or validating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The position is not on the 8x8 board.
    #[error("position {position} is off the board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
    },
    /// A piece already stands on the square.
    #[error("square {position} is already occupied")]
    SquareOccupied {
        /// The occupied square.
        position: Position,
    },
    /// A move was applied from a square with no piece.
    #[error("no piece on {position}")]
    EmptySquare {
        /// The empty square.
        position: Position,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string has fewer than 2 or more than 6 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 2 to 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from the JSON wire encoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not a valid encoding of the requested value.
    #[error("malformed game encoding: {source}")]
    Json {
        /// The underlying serde_json error.
        #[from]
        source: serde_json::Error,
    },
}
