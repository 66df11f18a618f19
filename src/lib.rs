//! Swiss tournament web app: library with models, pairing logic, and ledger storage.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{compute_standings, next_round};
pub use models::{
    MatchId, MatchOutcome, Pairing, Player, PlayerId, Round, StandingEntry, Tournament,
    TournamentError,
};
pub use store::{LedgerStore, MemoryLedger, SqliteLedger, StorageError, StoreResult};
