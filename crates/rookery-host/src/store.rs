//! Game storage.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HostError;
use crate::table::Table;

/// Identifies a stored game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u32);

impl GameId {
    #[inline]
    pub const fn new(id: u32) -> GameId {
        GameId(id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where tables live between commands.
///
/// `get` hands out an owned copy; changes are only kept once passed back
/// through `put`.
pub trait GameStore {
    /// Store a fresh table under a new id and return the id.
    fn create(&mut self, name: &str) -> Result<GameId, HostError>;

    /// Load the table stored under `id`.
    fn get(&self, id: GameId) -> Result<Table, HostError>;

    /// Overwrite the stored copy of an existing table.
    fn put(&mut self, table: &Table) -> Result<(), HostError>;

    /// All stored tables, in id order.
    fn list(&self) -> Result<Vec<Table>, HostError>;
}

/// A [`GameStore`] that keeps each table's JSON encoding in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u32,
    tables: BTreeMap<GameId, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn decode(json: &str) -> Result<Table, HostError> {
        serde_json::from_str(json).map_err(|source| HostError::Codec(source.into()))
    }

    fn encode(table: &Table) -> Result<String, HostError> {
        serde_json::to_string(table).map_err(|source| HostError::Codec(source.into()))
    }
}

impl GameStore for MemoryStore {
    fn create(&mut self, name: &str) -> Result<GameId, HostError> {
        self.next_id += 1;
        let id = GameId::new(self.next_id);
        let json = Self::encode(&Table::new(id, name))?;
        self.tables.insert(id, json);
        debug!(%id, name, "game created");
        Ok(id)
    }

    fn get(&self, id: GameId) -> Result<Table, HostError> {
        let json = self.tables.get(&id).ok_or(HostError::UnknownGame { id })?;
        Self::decode(json)
    }

    fn put(&mut self, table: &Table) -> Result<(), HostError> {
        let id = table.id();
        let json = Self::encode(table)?;
        let slot = self.tables.get_mut(&id).ok_or(HostError::UnknownGame { id })?;
        *slot = json;
        debug!(%id, "game saved");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Table>, HostError> {
        self.tables.values().map(|json| Self::decode(json)).collect()
    }
}
