//! Swiss pairing: draw the next round from the current standings.

use crate::models::{Pairing, Round, StandingEntry, TournamentError};

/// Draw the next round from standings already ranked by
/// [`compute_standings`](crate::logic::compute_standings).
///
/// Walks the ranking top to bottom and pairs adjacent entries: first vs
/// second, third vs fourth, and so on, giving each player an opponent with
/// an equal or nearly-equal record. Rematches are not avoided and pairs are
/// not rebalanced within a score group; both are documented limitations of
/// this single-pass policy.
///
/// With an odd number of players, the lowest-ranked player receives a bye
/// and is excluded from the pairings. Fewer than two players cannot form a
/// round.
pub fn next_round(standings: &[StandingEntry]) -> Result<Round, TournamentError> {
    if standings.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers);
    }

    let mut entries = standings;
    let mut bye = None;
    if entries.len() % 2 != 0 {
        if let Some((last, rest)) = entries.split_last() {
            bye = Some(last.player());
            entries = rest;
        }
    }

    let pairings = entries
        .chunks_exact(2)
        .map(|pair| Pairing {
            player_1: pair[0].player(),
            player_2: pair[1].player(),
        })
        .collect();

    Ok(Round { pairings, bye })
}
