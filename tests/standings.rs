//! Integration tests for standings: win records and ranking order.

use swiss_tournament_web::{MemoryLedger, PlayerId, Tournament};

fn tournament_with_players(names: &[&str]) -> (Tournament, Vec<PlayerId>) {
    let mut t = Tournament::new(Box::new(MemoryLedger::new()));
    let ids = names
        .iter()
        .map(|name| t.register_player(*name).unwrap().id)
        .collect();
    (t, ids)
}

#[test]
fn no_matches_puts_everyone_at_zero() {
    let (t, _) = tournament_with_players(&["Ada", "Ben", "Cleo", "Dev"]);
    let standings = t.standings().unwrap();
    assert_eq!(standings.len(), 4);
    for entry in &standings {
        assert_eq!(entry.wins, 0);
        assert_eq!(entry.matches, 0);
    }
}

#[test]
fn winners_rank_above_losers() {
    let (mut t, ids) = tournament_with_players(&["Ada", "Ben", "Cleo", "Dev"]);
    t.report_match(ids[0], ids[1]).unwrap(); // Ada beats Ben
    t.report_match(ids[2], ids[3]).unwrap(); // Cleo beats Dev

    let standings = t.standings().unwrap();
    let ranked: Vec<PlayerId> = standings.iter().map(|e| e.player_id).collect();
    assert_eq!(ranked, vec![ids[0], ids[2], ids[1], ids[3]]);
    assert_eq!(standings[0].wins, 1);
    assert_eq!(standings[1].wins, 1);
    assert_eq!(standings[2].wins, 0);
    assert_eq!(standings[3].wins, 0);
}

#[test]
fn wins_never_exceed_matches_and_sum_to_match_count() {
    let (mut t, ids) = tournament_with_players(&["Ada", "Ben", "Cleo", "Dev", "Eve"]);
    t.report_match(ids[0], ids[1]).unwrap();
    t.report_match(ids[2], ids[3]).unwrap();
    t.report_match(ids[0], ids[2]).unwrap();
    t.report_match(ids[1], ids[4]).unwrap();

    let standings = t.standings().unwrap();
    for entry in &standings {
        assert!(entry.wins <= entry.matches);
    }
    let total_wins: u32 = standings.iter().map(|e| e.wins).sum();
    assert_eq!(total_wins, 4);
}

#[test]
fn more_games_ranks_a_tied_player_higher() {
    let (mut t, ids) = tournament_with_players(&["Ada", "Ben", "Cleo", "Dev"]);
    t.report_match(ids[0], ids[1]).unwrap(); // Ada 1/1
    t.report_match(ids[2], ids[3]).unwrap(); // Cleo 1/1
    t.report_match(ids[3], ids[2]).unwrap(); // Cleo and Dev now 1/2

    // Cleo and Dev are on 1 win from 2 games, Ada on 1 win from 1 game:
    // more games played ranks higher on equal wins.
    let standings = t.standings().unwrap();
    let ranked: Vec<PlayerId> = standings.iter().map(|e| e.player_id).collect();
    assert_eq!(ranked, vec![ids[2], ids[3], ids[0], ids[1]]);
}

#[test]
fn ties_on_both_keys_break_by_lowest_id() {
    let (t, ids) = tournament_with_players(&["Zoe", "Yusuf", "Xia"]);
    let standings = t.standings().unwrap();
    let ranked: Vec<PlayerId> = standings.iter().map(|e| e.player_id).collect();
    assert_eq!(ranked, ids);
}

#[test]
fn standings_are_empty_with_no_players() {
    let (t, _) = tournament_with_players(&[]);
    assert!(t.standings().unwrap().is_empty());
}
