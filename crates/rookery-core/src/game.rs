//! The game state machine: turn order, legality filtering, and terminal detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{BoardError, CodecError, InvalidMoveReason, MoveError};
use crate::movegen::MoveSet;
use crate::position::Position;

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The given side is to move.
    Active(Color),
    /// Checkmate, stalemate, or resignation. Nothing moves any more.
    Over,
}

/// A game: a state and the board it owns.
///
/// Two games are equal when their states match and their boards match
/// square by square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    state: GameState,
    board: Board,
}

/// Wire shape of a [`Game`]: `{"turn": "WHITE" | "BLACK" | null, "board": ...}`.
#[derive(Serialize, Deserialize)]
struct GameRecord {
    turn: Option<Color>,
    board: Board,
}

impl TryFrom<GameRecord> for Game {
    type Error = BoardError;

    /// Rebuild a game, rejecting unplayable boards. An active game whose
    /// side to move has no legal move comes back as over.
    fn try_from(record: GameRecord) -> Result<Game, BoardError> {
        record.board.validate()?;
        let mut game = Game {
            state: GameState::Over,
            board: record.board,
        };
        if let Some(turn) = record.turn
            && !game.has_no_legal_moves(turn)
        {
            game.state = GameState::Active(turn);
        }
        Ok(game)
    }
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> GameRecord {
        GameRecord {
            turn: game.turn(),
            board: game.board,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game {
            state: GameState::Active(Color::White),
            board: Board::starting_position(),
        }
    }

    /// Build an active game from an arbitrary board and side to move.
    pub fn from_parts(turn: Color, board: Board) -> Game {
        Game {
            state: GameState::Active(turn),
            board,
        }
    }

    /// Restore a game from its JSON encoding.
    ///
    /// The board must pass [`Board::validate`]. Pawns without a `hasMoved`
    /// entry count as moved when they stand off their starting row.
    pub fn from_json(json: &str) -> Result<Game, CodecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this game as JSON.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The side to move, or `None` once the game is over.
    #[inline]
    pub fn turn(&self) -> Option<Color> {
        match self.state {
            GameState::Active(color) => Some(color),
            GameState::Over => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves for the piece on `start`, or `None` if the square is empty.
    ///
    /// Each pseudo-legal candidate is replayed on a scratch copy of the board
    /// and kept only if the mover's king is not in check afterwards. The turn
    /// is not consulted, so this also answers "what could that piece do".
    pub fn valid_moves(&self, start: Position) -> Option<MoveSet> {
        let piece = self.board.get_piece(start)?;
        let color = piece.color();

        let mut scratch = self.board.copy_of();
        let mut legal = MoveSet::new();
        for mv in piece.piece_moves(&self.board, start) {
            if scratch.sim_move(mv).is_ok() && !scratch.is_in_check(color) {
                legal.insert(mv);
            }
            scratch.copy_from(&self.board);
        }
        Some(legal)
    }

    /// Destination squares of [`Game::valid_moves`], for highlighting.
    pub fn valid_end_positions(&self, start: Position) -> Option<BTreeSet<Position>> {
        self.valid_moves(start)
            .map(|moves| moves.into_iter().map(Move::end).collect())
    }

    /// Every legal move available to `color`, across all of its pieces.
    pub fn legal_moves(&self, color: Color) -> MoveSet {
        self.board
            .pieces_of(color)
            .filter_map(|(pos, _)| self.valid_moves(pos))
            .flatten()
            .collect()
    }

    fn has_no_legal_moves(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .all(|(pos, _)| self.valid_moves(pos).is_none_or(|moves| moves.is_empty()))
    }

    /// Submit a move for the side to move.
    ///
    /// Checks run in this order: game over, empty start square, turn
    /// ownership, legality. On success the turn passes to the other side and
    /// the game ends if that side is checkmated or stalemated. On failure
    /// nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let GameState::Active(turn) = self.state else {
            return Err(MoveError::GameOver);
        };

        let piece = self.board.get_piece(mv.start()).ok_or(MoveError::InvalidMove {
            mv,
            reason: InvalidMoveReason::EmptySquare,
        })?;

        if piece.color() != turn {
            debug!(mv = %mv, color = %piece.color(), "move rejected: wrong turn");
            return Err(MoveError::WrongTurn { color: piece.color() });
        }

        let is_legal = self.valid_moves(mv.start()).is_some_and(|moves| moves.contains(&mv));
        if !is_legal {
            debug!(mv = %mv, "move rejected: not legal");
            return Err(MoveError::InvalidMove {
                mv,
                reason: InvalidMoveReason::NotLegal,
            });
        }

        self.board.do_move(mv).map_err(|_| MoveError::InvalidMove {
            mv,
            reason: InvalidMoveReason::NotLegal,
        })?;

        let next = turn.flip();
        self.state = GameState::Active(next);
        debug!(mv = %mv, next = %next, "move applied");

        if self.is_in_checkmate(next) {
            info!(loser = %next, "checkmate");
            self.state = GameState::Over;
        } else if self.is_in_stalemate(next) {
            info!(color = %next, "stalemate");
            self.state = GameState::Over;
        }

        Ok(())
    }

    /// End the game administratively, e.g. on resignation.
    pub fn set_game_over(&mut self) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        info!("game ended administratively");
        self.state = GameState::Over;
        Ok(())
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.has_no_legal_moves(color)
    }

    /// Not in check, but no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.has_no_legal_moves(color)
    }
}
