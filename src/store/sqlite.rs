//! SQLite-backed ledger store.

use crate::models::{MatchOutcome, Player, PlayerId};
use crate::store::traits::{LedgerStore, StorageError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

/// Durable ledger backed by a SQLite database file.
///
/// Ids come from `INTEGER PRIMARY KEY AUTOINCREMENT`, so they are never
/// reused, even after a bulk reset. Foreign keys are enforced: clearing
/// players while matches still reference them is a backend error.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Fresh in-memory database (tests, throwaway tournaments).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let mut ledger = Self { conn };
        ledger.create_schema()?;
        Ok(ledger)
    }

    /// Create the players and matches tables if they do not exist.
    fn create_schema(&mut self) -> StoreResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT    NOT NULL
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                winner      INTEGER NOT NULL
                                    REFERENCES players (id),
                loser       INTEGER NOT NULL
                                    REFERENCES players (id),
                reported_at TEXT    NOT NULL
            )",
            [],
        )?;

        tx.commit()?;
        Ok(())
    }
}

impl LedgerStore for SqliteLedger {
    fn insert_player(&mut self, name: &str) -> StoreResult<Player> {
        self.conn
            .execute("INSERT INTO players (name) VALUES (?1)", params![name])?;
        Ok(Player {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn insert_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        reported_at: DateTime<Utc>,
    ) -> StoreResult<MatchOutcome> {
        self.conn.execute(
            "INSERT INTO matches (winner, loser, reported_at) VALUES (?1, ?2, ?3)",
            params![winner, loser, reported_at],
        )?;
        Ok(MatchOutcome {
            id: self.conn.last_insert_rowid(),
            winner,
            loser,
            reported_at,
        })
    }

    fn list_players(&self) -> StoreResult<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM players ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Player {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    fn list_matches(&self) -> StoreResult<Vec<MatchOutcome>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, winner, loser, reported_at FROM matches ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(MatchOutcome {
                id: row.get(0)?,
                winner: row.get(1)?,
                loser: row.get(2)?,
                reported_at: row.get(3)?,
            })
        })?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    fn count_players(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM players", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn clear_matches(&mut self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM matches", [])?;
        Ok(())
    }

    fn clear_players(&mut self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }
}
