//! Chess rules engine: positions, pseudo-legal move generation, legality
//! filtering against self-check, and the game state machine.
//!
//! The engine is synchronous and holds no locks. A host that shares a
//! [`Game`] between callers must serialize mutating calls itself.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, CodecError, FenError, InvalidMoveReason, MoveError, MoveParseError};
pub use fen::STARTING_FEN;
pub use game::{Game, GameState};
pub use movegen::MoveSet;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
