//! Hosting for rookery games: seats, storage, and a line-based command session.

pub mod command;
pub mod error;
pub mod session;
pub mod store;
pub mod table;

pub use command::{Command, SessionOption, parse_command};
pub use error::HostError;
pub use session::{Session, SessionConfig};
pub use store::{GameId, GameStore, MemoryStore};
pub use table::Table;
