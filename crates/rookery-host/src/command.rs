//! Session command parsing.

use rookery_core::{Color, Move, Position};

use crate::error::HostError;
use crate::store::GameId;

/// A setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set orientation <white|black>` -- which side is drawn at the bottom.
    Orientation(Color),
    /// `set show_board <on|off>` -- print the board after each accepted move.
    ShowBoard(bool),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new [name]` -- create a game and open it.
    New(Option<String>),
    /// `games` -- list stored games.
    Games,
    /// `open <id>` -- switch to a stored game.
    Open(GameId),
    /// `join <white|black> <user>` -- take a seat.
    Join { color: Color, username: String },
    /// `leave <user>` -- give up every seat held.
    Leave { username: String },
    /// `move <user> <e2e4|e7e8q>` -- submit a move.
    Move { username: String, mv: Move },
    /// `moves <square>` -- show the legal moves of one piece.
    Moves(Position),
    /// `resign <user>` -- concede the game.
    Resign { username: String },
    /// `board [white|black]` -- draw the board.
    Board(Option<Color>),
    /// `export` -- print the game as JSON.
    Export,
    /// `import <json>` -- replace the game with a JSON encoding.
    Import(String),
    /// `fen [fen]` -- print the game as FEN, or replace it with one.
    Fen(Option<String>),
    /// `set <option> <value>` -- change a session setting.
    Set(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, HostError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New(rest_of_line(line))),
        "games" => Ok(Command::Games),
        "open" => parse_open(&tokens[1..]),
        "join" => parse_join(&tokens[1..]),
        "leave" => match tokens[1..] {
            [username] => Ok(Command::Leave {
                username: username.to_string(),
            }),
            _ => Err(HostError::MalformedCommand { usage: "leave <user>" }),
        },
        "move" => parse_move(&tokens[1..]),
        "moves" => parse_moves(&tokens[1..]),
        "resign" => match tokens[1..] {
            [username] => Ok(Command::Resign {
                username: username.to_string(),
            }),
            _ => Err(HostError::MalformedCommand { usage: "resign <user>" }),
        },
        "board" => match tokens[1..] {
            [] => Ok(Command::Board(None)),
            [side] => parse_color(side)
                .map(|color| Command::Board(Some(color)))
                .ok_or(HostError::MalformedCommand {
                    usage: "board [white|black]",
                }),
            _ => Err(HostError::MalformedCommand {
                usage: "board [white|black]",
            }),
        },
        "export" => Ok(Command::Export),
        "import" => rest_of_line(line)
            .map(Command::Import)
            .ok_or(HostError::MalformedCommand { usage: "import <json>" }),
        "fen" => Ok(Command::Fen(rest_of_line(line))),
        "set" => parse_set(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Everything after the command word, with surrounding whitespace removed.
fn rest_of_line(line: &str) -> Option<String> {
    let (_, rest) = line.trim().split_once(char::is_whitespace)?;
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn parse_color(token: &str) -> Option<Color> {
    match token.to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Color::White),
        "black" | "b" => Some(Color::Black),
        _ => None,
    }
}

fn parse_open(tokens: &[&str]) -> Result<Command, HostError> {
    let malformed = HostError::MalformedCommand { usage: "open <id>" };
    match tokens {
        [id] => id.parse().map(|id| Command::Open(GameId::new(id))).map_err(|_| malformed),
        _ => Err(malformed),
    }
}

fn parse_join(tokens: &[&str]) -> Result<Command, HostError> {
    let malformed = HostError::MalformedCommand {
        usage: "join <white|black> <user>",
    };
    match tokens {
        [side, username] => {
            let color = parse_color(side).ok_or(malformed)?;
            Ok(Command::Join {
                color,
                username: username.to_string(),
            })
        }
        _ => Err(malformed),
    }
}

fn parse_move(tokens: &[&str]) -> Result<Command, HostError> {
    match tokens {
        [username, notation] => Ok(Command::Move {
            username: username.to_string(),
            mv: notation.parse()?,
        }),
        _ => Err(HostError::MalformedCommand {
            usage: "move <user> <e2e4|e7e8q>",
        }),
    }
}

fn parse_moves(tokens: &[&str]) -> Result<Command, HostError> {
    let malformed = HostError::MalformedCommand { usage: "moves <square>" };
    match tokens {
        [square] => Position::from_algebraic(square)
            .map(Command::Moves)
            .ok_or(malformed),
        _ => Err(malformed),
    }
}

fn parse_set(tokens: &[&str]) -> Result<Command, HostError> {
    let [name, value] = tokens else {
        return Err(HostError::MalformedCommand {
            usage: "set <option> <value>",
        });
    };

    let invalid = || HostError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "orientation" => SessionOption::Orientation(parse_color(value).ok_or_else(invalid)?),
        "show_board" => match value.to_ascii_lowercase().as_str() {
            "on" | "true" | "yes" => SessionOption::ShowBoard(true),
            "off" | "false" | "no" => SessionOption::ShowBoard(false),
            _ => return Err(invalid()),
        },
        _ => {
            return Err(HostError::UnknownOption {
                name: name.to_string(),
            });
        }
    };

    Ok(Command::Set(option))
}
