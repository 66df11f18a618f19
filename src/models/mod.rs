//! Data structures for the Swiss tournament: players, outcomes, standings, pairings.

mod game;
mod player;
mod tournament;

pub use game::{MatchId, MatchOutcome, Pairing, Round};
pub use player::{Player, PlayerId, StandingEntry};
pub use tournament::{Tournament, TournamentError};
