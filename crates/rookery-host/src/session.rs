//! The command loop: reads one command per line and writes replies.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Color, Game, Move, Position};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::HostError;
use crate::store::{GameId, GameStore, MemoryStore};
use crate::table::Table;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side drawn at the bottom when `board` is given no side.
    pub orientation: Color,
    /// Draw the board after every accepted move.
    pub show_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            orientation: Color::White,
            show_board: false,
        }
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A command session over a [`GameStore`], with one game open at a time.
pub struct Session<S = MemoryStore> {
    store: S,
    open: Option<GameId>,
    config: SessionConfig,
}

impl<S: GameStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self {
            store,
            open: None,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The id of the open game, if any.
    #[inline]
    pub fn open_game(&self) -> Option<GameId> {
        self.open
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command failures are reported on `output` as `error: ...` lines and
    /// the loop carries on. Only I/O failures end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), HostError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(HostError::Io { source }) => return Err(HostError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session closed");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, HostError> {
        match cmd {
            Command::New(name) => self.handle_new(name, out)?,
            Command::Games => self.handle_games(out)?,
            Command::Open(id) => self.handle_open(id, out)?,
            Command::Join { color, username } => self.handle_join(color, &username, out)?,
            Command::Leave { username } => self.handle_leave(&username, out)?,
            Command::Move { username, mv } => self.handle_move(&username, mv, out)?,
            Command::Moves(position) => self.handle_moves(position, out)?,
            Command::Resign { username } => self.handle_resign(&username, out)?,
            Command::Board(side) => self.handle_board(side, out)?,
            Command::Export => self.handle_export(out)?,
            Command::Import(json) => self.handle_import(&json, out)?,
            Command::Fen(fen) => self.handle_fen(fen.as_deref(), out)?,
            Command::Set(option) => self.handle_set(option, out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => writeln!(out, "unknown command: {name}")?,
        }
        Ok(Flow::Continue)
    }

    fn open_table(&self) -> Result<Table, HostError> {
        let id = self.open.ok_or(HostError::NoOpenGame)?;
        self.store.get(id)
    }

    fn handle_new<W: Write>(&mut self, name: Option<String>, out: &mut W) -> Result<(), HostError> {
        let name = name.unwrap_or_else(|| "casual game".to_string());
        let id = self.store.create(&name)?;
        self.open = Some(id);
        info!(%id, name = %name, "game opened");
        writeln!(out, "game {id} created: {name}")?;
        Ok(())
    }

    fn handle_games<W: Write>(&self, out: &mut W) -> Result<(), HostError> {
        for table in self.store.list()? {
            let status = match table.game().turn() {
                Some(color) => format!("{color} to move"),
                None => "over".to_string(),
            };
            writeln!(
                out,
                "{} {} [white: {}, black: {}] {}",
                table.id(),
                table.name(),
                table.player(Color::White).unwrap_or("-"),
                table.player(Color::Black).unwrap_or("-"),
                status
            )?;
        }
        Ok(())
    }

    fn handle_open<W: Write>(&mut self, id: GameId, out: &mut W) -> Result<(), HostError> {
        let table = self.store.get(id)?;
        self.open = Some(id);
        info!(%id, "game opened");
        writeln!(out, "opened game {id}: {}", table.name())?;
        Ok(())
    }

    fn handle_join<W: Write>(&mut self, color: Color, username: &str, out: &mut W) -> Result<(), HostError> {
        let mut table = self.open_table()?;
        table.join(color, username)?;
        self.store.put(&table)?;
        writeln!(out, "{username} plays {color}")?;
        Ok(())
    }

    fn handle_leave<W: Write>(&mut self, username: &str, out: &mut W) -> Result<(), HostError> {
        let mut table = self.open_table()?;
        table.leave(username)?;
        self.store.put(&table)?;
        writeln!(out, "{username} left")?;
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, username: &str, mv: Move, out: &mut W) -> Result<(), HostError> {
        let mut table = self.open_table()?;
        table.make_move(username, mv)?;
        self.store.put(&table)?;
        writeln!(out, "{username} played {mv}")?;

        let game = table.game();
        if self.config.show_board {
            writeln!(out, "{}", game.board().pretty_from(self.config.orientation, &BTreeSet::new()))?;
        }

        // The mover's opponent is the only side whose status can change.
        let Some(mover) = game.board().get_piece(mv.end()).map(|p| p.color()) else {
            return Ok(());
        };
        let opponent = !mover;
        if game.is_in_checkmate(opponent) {
            writeln!(out, "checkmate, {mover} wins")?;
        } else if game.is_in_stalemate(opponent) {
            writeln!(out, "stalemate, {opponent} has no legal moves")?;
        } else if game.is_in_check(opponent) {
            writeln!(out, "{opponent} is in check")?;
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, position: Position, out: &mut W) -> Result<(), HostError> {
        let table = self.open_table()?;
        let game = table.game();
        let moves = game.valid_moves(position).ok_or(HostError::NoPiece { position })?;
        let ends: BTreeSet<Position> = moves.iter().map(|mv| mv.end()).collect();

        writeln!(out, "{}", game.board().pretty_from(self.config.orientation, &ends))?;
        if moves.is_empty() {
            writeln!(out, "no legal moves from {position}")?;
        } else {
            let listed: Vec<String> = moves.iter().map(|mv| mv.to_notation()).collect();
            writeln!(out, "moves: {}", listed.join(" "))?;
        }
        Ok(())
    }

    fn handle_resign<W: Write>(&mut self, username: &str, out: &mut W) -> Result<(), HostError> {
        let mut table = self.open_table()?;
        let color = table.resign(username)?;
        self.store.put(&table)?;
        writeln!(out, "{username} resigned, {} wins", !color)?;
        Ok(())
    }

    fn handle_board<W: Write>(&self, side: Option<Color>, out: &mut W) -> Result<(), HostError> {
        let table = self.open_table()?;
        let perspective = side.unwrap_or(self.config.orientation);
        writeln!(out, "{}", table.game().board().pretty_from(perspective, &BTreeSet::new()))?;
        Ok(())
    }

    fn handle_export<W: Write>(&self, out: &mut W) -> Result<(), HostError> {
        let table = self.open_table()?;
        writeln!(out, "{}", table.game().to_json()?)?;
        Ok(())
    }

    fn handle_import<W: Write>(&mut self, json: &str, out: &mut W) -> Result<(), HostError> {
        let mut table = self.open_table()?;
        let game = Game::from_json(json)?;
        self.replace_game(&mut table, game)?;
        writeln!(out, "game {} imported", table.id())?;
        Ok(())
    }

    fn handle_fen<W: Write>(&mut self, fen: Option<&str>, out: &mut W) -> Result<(), HostError> {
        let mut table = self.open_table()?;
        match fen {
            None => writeln!(out, "{}", table.game().to_fen())?,
            Some(fen) => {
                let game: Game = fen.parse()?;
                self.replace_game(&mut table, game)?;
                writeln!(out, "game {} set from FEN", table.id())?;
            }
        }
        Ok(())
    }

    fn replace_game(&mut self, table: &mut Table, game: Game) -> Result<(), HostError> {
        debug!(id = %table.id(), turn = ?game.turn(), "replacing game");
        table.set_game(game);
        self.store.put(table)
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), HostError> {
        match option {
            SessionOption::Orientation(color) => {
                self.config.orientation = color;
                writeln!(out, "orientation set to {color}")?;
            }
            SessionOption::ShowBoard(on) => {
                self.config.show_board = on;
                writeln!(out, "show_board set to {}", if on { "on" } else { "off" })?;
            }
        }
        Ok(())
    }
}
