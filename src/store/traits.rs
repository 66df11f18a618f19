//! Ledger store trait: the persistence boundary for players and outcomes.

use crate::models::{MatchOutcome, Player, PlayerId};
use chrono::{DateTime, Utc};

/// Errors from the ledger backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// The underlying database reported an error.
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StoreResult<T> = Result<T, StorageError>;

/// Durable storage of players and match outcomes.
///
/// Implementations can be SQLite-backed or in-memory. Each call is atomic on
/// its own; callers perform no multi-statement transactions.
pub trait LedgerStore: Send {
    /// Insert a player; the store assigns the id. Returns the stored record.
    fn insert_player(&mut self, name: &str) -> StoreResult<Player>;

    /// Insert a match outcome; the store assigns the id. Callers validate
    /// that both ids are registered, though backends may also enforce it.
    fn insert_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        reported_at: DateTime<Utc>,
    ) -> StoreResult<MatchOutcome>;

    /// All registered players, in registration order.
    fn list_players(&self) -> StoreResult<Vec<Player>>;

    /// All recorded outcomes, in report order.
    fn list_matches(&self) -> StoreResult<Vec<MatchOutcome>>;

    /// Number of registered players.
    fn count_players(&self) -> StoreResult<u64>;

    /// Remove all match records.
    fn clear_matches(&mut self) -> StoreResult<()>;

    /// Remove all player records. Backends refuse while matches still
    /// reference players; clear matches first.
    fn clear_players(&mut self) -> StoreResult<()>;
}
