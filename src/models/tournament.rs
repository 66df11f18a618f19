//! Tournament facade and error type.

use crate::logic;
use crate::models::game::{MatchOutcome, Round};
use crate::models::player::{Player, PlayerId, StandingEntry};
use crate::store::{LedgerStore, StorageError};
use chrono::Utc;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The ledger store failed to read or write.
    Storage(StorageError),
    /// Fewer than two registered players; no round can be drawn.
    NotEnoughPlayers,
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A reported result references a player id that is not registered.
    PlayerNotFound(PlayerId),
    /// A reported result names the same player as winner and loser.
    SelfMatch(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::Storage(e) => write!(f, "{}", e),
            TournamentError::NotEnoughPlayers => {
                write!(f, "Need at least 2 players to draw a round")
            }
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} is not registered", id),
            TournamentError::SelfMatch(id) => {
                write!(f, "Player {} cannot play against themselves", id)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<StorageError> for TournamentError {
    fn from(e: StorageError) -> Self {
        TournamentError::Storage(e)
    }
}

/// A Swiss tournament over an injected ledger store.
///
/// Owns the store handle for its lifetime. Standings and pairings are
/// recomputed from the ledger on every call rather than cached, so the view
/// always reflects the latest reported results.
pub struct Tournament {
    store: Box<dyn LedgerStore>,
}

impl Tournament {
    /// Create a tournament over the given ledger store.
    pub fn new(store: Box<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Register a player. The ledger assigns the id; names need not be
    /// unique. Leading and trailing whitespace is trimmed.
    pub fn register_player(&mut self, name: impl AsRef<str>) -> Result<Player, TournamentError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        Ok(self.store.insert_player(name)?)
    }

    /// Record the outcome of a single match between two registered players.
    pub fn report_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchOutcome, TournamentError> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }
        let players = self.store.list_players()?;
        for id in [winner, loser] {
            if !players.iter().any(|p| p.id == id) {
                return Err(TournamentError::PlayerNotFound(id));
            }
        }
        Ok(self.store.insert_match(winner, loser, Utc::now())?)
    }

    /// Number of registered players.
    pub fn count_players(&self) -> Result<u64, TournamentError> {
        Ok(self.store.count_players()?)
    }

    /// Ranked standings: wins descending, matches played descending, then
    /// player id ascending.
    pub fn standings(&self) -> Result<Vec<StandingEntry>, TournamentError> {
        let players = self.store.list_players()?;
        let matches = self.store.list_matches()?;
        Ok(logic::compute_standings(&players, &matches))
    }

    /// Draw the next round from the current standings.
    pub fn swiss_pairings(&self) -> Result<Round, TournamentError> {
        let standings = self.standings()?;
        logic::next_round(&standings)
    }

    /// Remove all recorded matches.
    pub fn clear_matches(&mut self) -> Result<(), TournamentError> {
        Ok(self.store.clear_matches()?)
    }

    /// Remove all players. Matches must be cleared first; the ledger refuses
    /// to orphan recorded outcomes.
    pub fn clear_players(&mut self) -> Result<(), TournamentError> {
        Ok(self.store.clear_players()?)
    }
}
