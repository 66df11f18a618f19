//! Integration tests for the SQLite ledger backend.

use swiss_tournament_web::{PlayerId, SqliteLedger, Tournament, TournamentError};

fn sqlite_tournament() -> Tournament {
    let ledger = SqliteLedger::open_in_memory().unwrap();
    Tournament::new(Box::new(ledger))
}

#[test]
fn round_trip_standings_and_pairings() {
    let mut t = sqlite_tournament();
    let ids: Vec<PlayerId> = ["Ada", "Ben", "Cleo", "Dev"]
        .iter()
        .map(|name| t.register_player(*name).unwrap().id)
        .collect();
    t.report_match(ids[0], ids[1]).unwrap();
    t.report_match(ids[2], ids[3]).unwrap();

    let standings = t.standings().unwrap();
    let ranked: Vec<PlayerId> = standings.iter().map(|e| e.player_id).collect();
    assert_eq!(ranked, vec![ids[0], ids[2], ids[1], ids[3]]);

    let round = t.swiss_pairings().unwrap();
    assert_eq!(round.pairings.len(), 2);
    assert!(round.bye.is_none());
    assert_eq!(round.pairings[0].player_1.id, ids[0]);
    assert_eq!(round.pairings[0].player_2.id, ids[2]);
}

#[test]
fn reported_outcomes_survive_in_the_ledger() {
    let mut t = sqlite_tournament();
    let ada = t.register_player("Ada").unwrap();
    let ben = t.register_player("Ben").unwrap();

    let outcome = t.report_match(ada.id, ben.id).unwrap();
    assert_eq!(outcome.winner, ada.id);
    assert_eq!(outcome.loser, ben.id);

    let standings = t.standings().unwrap();
    assert_eq!(standings[0].player_id, ada.id);
    assert_eq!(standings[0].wins, 1);
    assert_eq!(standings[0].matches, 1);
}

#[test]
fn foreign_keys_block_clearing_players_before_matches() {
    let mut t = sqlite_tournament();
    let ada = t.register_player("Ada").unwrap();
    let ben = t.register_player("Ben").unwrap();
    t.report_match(ada.id, ben.id).unwrap();

    assert!(matches!(
        t.clear_players(),
        Err(TournamentError::Storage(_))
    ));

    t.clear_matches().unwrap();
    t.clear_players().unwrap();
    assert_eq!(t.count_players().unwrap(), 0);
    assert!(t.standings().unwrap().is_empty());
}

#[test]
fn ids_are_not_reused_after_reset() {
    let mut t = sqlite_tournament();
    t.register_player("Ada").unwrap();
    let ben = t.register_player("Ben").unwrap();

    t.clear_players().unwrap();
    let cleo = t.register_player("Cleo").unwrap();
    assert!(cleo.id > ben.id);
}
