//! Match outcomes and round pairings.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a recorded match (assigned by the ledger store).
pub type MatchId = i64;

/// The recorded outcome of one match. No draws: every match has exactly one
/// winner and one loser.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    /// When the result was reported. Informational; not used for ranking.
    pub reported_at: DateTime<Utc>,
}

/// Two players drawn against each other for one round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_1: Player,
    pub player_2: Player,
}

/// One round's draw: adjacent pairings down the standings, plus the bye when
/// the player count is odd.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub pairings: Vec<Pairing>,
    /// The lowest-ranked player sits the round out when the count is odd.
    pub bye: Option<Player>,
}
