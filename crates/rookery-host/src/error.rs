//! Host errors.

use rookery_core::{CodecError, Color, FenError, MoveError, MoveParseError, Position};

use crate::store::GameId;

/// Errors that can occur while hosting games.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The engine rejected a move or resignation.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// A stored or imported game could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),

    /// A move argument is not coordinate notation.
    #[error(transparent)]
    MoveParse(#[from] MoveParseError),

    /// No game is stored under this id.
    #[error("no game with id {id}")]
    UnknownGame {
        /// The missing id.
        id: GameId,
    },

    /// The command needs a game but none is open.
    #[error("no game is open; use `new` or `open <id>` first")]
    NoOpenGame,

    /// Someone already sits on that side.
    #[error("{color} is already taken by {username}")]
    ColorTaken {
        /// The requested seat.
        color: Color,
        /// Who holds it.
        username: String,
    },

    /// The username holds no seat in the game.
    #[error("{username} is not seated")]
    NotSeated {
        /// The unknown username.
        username: String,
    },

    /// There is no piece to list moves for.
    #[error("no piece on {position}")]
    NoPiece {
        /// The empty square.
        position: Position,
    },

    /// A command was recognized but its arguments were not.
    #[error("malformed command, usage: {usage}")]
    MalformedCommand {
        /// The expected form of the command.
        usage: &'static str,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred on the session streams.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
