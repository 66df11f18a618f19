//! Standings: win records per player, ranked.

use crate::models::{MatchOutcome, Player, PlayerId, StandingEntry};
use std::collections::HashMap;

/// Compute the ranked standings for `players` from every recorded outcome.
///
/// Every registered player appears exactly once; players with no matches sit
/// at (0 wins, 0 played). Order: wins descending, then matches played
/// descending (a tied player with more games ranks higher), then player id
/// ascending. The id tie-break keeps the order stable instead of leaning on
/// storage iteration order.
pub fn compute_standings(players: &[Player], matches: &[MatchOutcome]) -> Vec<StandingEntry> {
    let mut wins: HashMap<PlayerId, u32> = HashMap::new();
    let mut played: HashMap<PlayerId, u32> = HashMap::new();
    for m in matches {
        *wins.entry(m.winner).or_insert(0) += 1;
        *played.entry(m.winner).or_insert(0) += 1;
        *played.entry(m.loser).or_insert(0) += 1;
    }

    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|p| StandingEntry {
            player_id: p.id,
            name: p.name.clone(),
            wins: wins.get(&p.id).copied().unwrap_or(0),
            matches: played.get(&p.id).copied().unwrap_or(0),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.matches.cmp(&a.matches))
            .then(a.player_id.cmp(&b.player_id))
    });

    standings
}
