//! A hosted game: who sits on which side, and the game itself.

use serde::{Deserialize, Serialize};
use tracing::info;

use rookery_core::{Color, Game, Move, MoveError};

use crate::error::HostError;
use crate::store::GameId;

/// One hosted game and its seats.
///
/// A username may hold both seats, which lets one person play both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    id: GameId,
    name: String,
    white_username: Option<String>,
    black_username: Option<String>,
    game: Game,
}

impl Table {
    /// Create a table with empty seats and a game in the starting position.
    pub fn new(id: GameId, name: impl Into<String>) -> Table {
        Table {
            id,
            name: name.into(),
            white_username: None,
            black_username: None,
            game: Game::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Replace the game, keeping the seats.
    pub fn set_game(&mut self, game: Game) {
        self.game = game;
    }

    /// The username seated on `color`, if any.
    pub fn player(&self, color: Color) -> Option<&str> {
        match color {
            Color::White => self.white_username.as_deref(),
            Color::Black => self.black_username.as_deref(),
        }
    }

    fn seat_mut(&mut self, color: Color) -> &mut Option<String> {
        match color {
            Color::White => &mut self.white_username,
            Color::Black => &mut self.black_username,
        }
    }

    fn holds(&self, color: Color, username: &str) -> bool {
        self.player(color) == Some(username)
    }

    /// Seat `username` on `color`.
    ///
    /// Rejoining a seat you already hold is a no-op.
    pub fn join(&mut self, color: Color, username: &str) -> Result<(), HostError> {
        match self.player(color) {
            Some(current) if current == username => Ok(()),
            Some(current) => Err(HostError::ColorTaken {
                color,
                username: current.to_string(),
            }),
            None => {
                info!(game = %self.id, %color, username, "player joined");
                *self.seat_mut(color) = Some(username.to_string());
                Ok(())
            }
        }
    }

    /// Vacate every seat `username` holds and return how many there were.
    pub fn leave(&mut self, username: &str) -> Result<usize, HostError> {
        let mut vacated = 0;
        for color in Color::ALL {
            if self.holds(color, username) {
                *self.seat_mut(color) = None;
                vacated += 1;
            }
        }
        if vacated == 0 {
            return Err(HostError::NotSeated {
                username: username.to_string(),
            });
        }
        info!(game = %self.id, username, "player left");
        Ok(vacated)
    }

    /// The side `username` plays, preferring the side to move when they hold both.
    pub fn color_of(&self, username: &str) -> Option<Color> {
        if let Some(turn) = self.game.turn()
            && self.holds(turn, username)
        {
            return Some(turn);
        }
        Color::ALL.into_iter().find(|&color| self.holds(color, username))
    }

    /// Submit a move on behalf of `username`.
    ///
    /// The username must be seated, and must hold the side to move; after
    /// that the game applies its own checks.
    pub fn make_move(&mut self, username: &str, mv: Move) -> Result<(), MoveError> {
        let color = self.color_of(username).ok_or_else(|| MoveError::NonexistentPlayer {
            username: username.to_string(),
        })?;
        let turn = self.game.turn().ok_or(MoveError::GameOver)?;
        if color != turn {
            return Err(MoveError::WrongTurn { color });
        }
        self.game.make_move(mv)
    }

    /// End the game because `username` gives up. Returns the side that resigned.
    pub fn resign(&mut self, username: &str) -> Result<Color, MoveError> {
        let color = self.color_of(username).ok_or_else(|| MoveError::NonexistentPlayer {
            username: username.to_string(),
        })?;
        self.game.set_game_over()?;
        info!(game = %self.id, %color, username, "resigned");
        Ok(color)
    }
}
