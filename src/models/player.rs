//! Player and StandingEntry data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (assigned by the ledger store).
pub type PlayerId = i64;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One row of the standings: a player's win record (for ranking / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    /// Matches this player has won.
    pub wins: u32,
    /// Matches this player has played, as winner or loser.
    pub matches: u32,
}

impl StandingEntry {
    /// The player identity behind this row (for pairing output).
    pub fn player(&self) -> Player {
        Player {
            id: self.player_id,
            name: self.name.clone(),
        }
    }
}
