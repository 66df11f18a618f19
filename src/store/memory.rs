//! In-memory ledger store.

use crate::models::{MatchId, MatchOutcome, Player, PlayerId};
use crate::store::traits::{LedgerStore, StorageError, StoreResult};
use chrono::{DateTime, Utc};

/// Ledger held entirely in memory. Fast but non-persistent: data is lost
/// when the store is dropped. Used by tests and by callers that want a
/// throwaway tournament.
///
/// Observable semantics match [`SqliteLedger`](crate::store::SqliteLedger):
/// ids start at 1 and are never reused, and players cannot be cleared while
/// matches still reference them.
#[derive(Debug)]
pub struct MemoryLedger {
    players: Vec<Player>,
    matches: Vec<MatchOutcome>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryLedger {
    fn insert_player(&mut self, name: &str) -> StoreResult<Player> {
        let player = Player::new(self.next_player_id, name);
        self.next_player_id += 1;
        self.players.push(player.clone());
        Ok(player)
    }

    fn insert_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        reported_at: DateTime<Utc>,
    ) -> StoreResult<MatchOutcome> {
        let outcome = MatchOutcome {
            id: self.next_match_id,
            winner,
            loser,
            reported_at,
        };
        self.next_match_id += 1;
        self.matches.push(outcome.clone());
        Ok(outcome)
    }

    fn list_players(&self) -> StoreResult<Vec<Player>> {
        Ok(self.players.clone())
    }

    fn list_matches(&self) -> StoreResult<Vec<MatchOutcome>> {
        Ok(self.matches.clone())
    }

    fn count_players(&self) -> StoreResult<u64> {
        Ok(self.players.len() as u64)
    }

    fn clear_matches(&mut self) -> StoreResult<()> {
        self.matches.clear();
        Ok(())
    }

    fn clear_players(&mut self) -> StoreResult<()> {
        if !self.matches.is_empty() {
            return Err(StorageError::Backend(
                "players are still referenced by recorded matches".to_string(),
            ));
        }
        self.players.clear();
        Ok(())
    }
}
