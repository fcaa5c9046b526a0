//! End-to-end persistence tests: payload in, rows out, idempotent.

use opendota_harvest::opendota::types::{MatchDetail, PublicMatch};
use opendota_harvest::storage::{
    models::{HeroBenchmarkRow, HeroPickRow, MatchRow},
    queries::*,
    HarvestDatabase,
};
use opendota_harvest::{HeroId, MatchId};
use serde_json::json;

fn detail_with_players(match_id: u64, hero_ids: &[u16]) -> MatchDetail {
    let players: Vec<_> = hero_ids
        .iter()
        .map(|hero_id| {
            json!({
                "hero_id": hero_id,
                "team_number": if *hero_id % 2 == 0 { 1 } else { 0 },
                "hero_variant": 1,
                "item_0": 1, "item_1": 2, "item_2": 3,
                "item_3": 4, "item_4": 5, "item_5": 6,
                "backpack_0": 0, "backpack_1": 0, "backpack_2": 0,
                "item_neutral": 310,
                "kills": 5, "deaths": 5, "assists": 10,
                "gold_per_min": 450, "xp_per_min": 520,
                "level": 20, "net_worth": 15000,
                "aghanims_scepter": 0, "aghanims_shard": 1, "moonshard": 0,
                "hero_damage": 18000, "tower_damage": 900, "hero_healing": 200
            })
        })
        .collect();
    serde_json::from_value(json!({"match_id": match_id, "players": players})).unwrap()
}

fn persist_match(db: &HarvestDatabase, summary: &PublicMatch, detail: &MatchDetail) {
    insert_match(db.connection(), &MatchRow::from_summary(summary)).unwrap();
    for player in &detail.players {
        insert_hero_pick(
            db.connection(),
            &HeroPickRow::from_player(summary.match_id, player),
        )
        .unwrap();
    }
}

fn summary(match_id: u64) -> PublicMatch {
    serde_json::from_value(json!({
        "match_id": match_id,
        "avg_rank_tier": 34,
        "radiant_win": true
    }))
    .unwrap()
}

#[test]
fn ten_player_detail_yields_ten_pick_rows() {
    let db = HarvestDatabase::new_in_memory().unwrap();
    let detail = detail_with_players(100, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    persist_match(&db, &summary(100), &detail);

    assert_eq!(count_matches(db.connection()).unwrap(), 1);
    assert_eq!(count_hero_picks(db.connection()).unwrap(), 10);
    let picks = picks_for_match(db.connection(), MatchId::new(100)).unwrap();
    assert_eq!(picks.len(), 10);
    assert!(picks.iter().all(|p| p.items == [1, 2, 3, 4, 5, 6]));
    assert!(picks.iter().all(|p| p.backpack == [0, 0, 0]));
}

#[test]
fn re_running_the_harvest_does_not_duplicate_rows() {
    let db = HarvestDatabase::new_in_memory().unwrap();
    let detail = detail_with_players(100, &[1, 2, 3]);

    persist_match(&db, &summary(100), &detail);
    persist_match(&db, &summary(100), &detail);

    assert_eq!(count_matches(db.connection()).unwrap(), 1);
    assert_eq!(count_hero_picks(db.connection()).unwrap(), 3);
}

#[test]
fn match_insert_precedes_picks_so_foreign_key_holds() {
    let db = HarvestDatabase::new_in_memory().unwrap();
    let detail = detail_with_players(200, &[14]);

    // Without the match row the pick is rejected outright.
    let orphan = HeroPickRow::from_player(MatchId::new(200), &detail.players[0]);
    assert!(insert_hero_pick(db.connection(), &orphan).is_err());

    // With it, the same insert lands.
    insert_match(db.connection(), &MatchRow::from_summary(&summary(200))).unwrap();
    assert!(insert_hero_pick(db.connection(), &orphan).unwrap());
}

#[test]
fn extraction_preserves_the_persisted_field_set() {
    let db = HarvestDatabase::new_in_memory().unwrap();
    let detail = detail_with_players(300, &[7]);
    persist_match(&db, &summary(300), &detail);

    let pick = &picks_for_match(db.connection(), MatchId::new(300)).unwrap()[0];
    assert_eq!(pick.hero_id, HeroId::new(7));
    assert_eq!(pick.team, 0);
    assert_eq!(pick.facet, 1);
    assert_eq!(pick.neutral_item, 310);
    assert_eq!(pick.kills, 5);
    assert_eq!(pick.gold_per_min, 450);
    assert_eq!(pick.net_worth, 15_000);
    assert!(!pick.aghanims_scepter);
    assert!(pick.aghanims_shard);
    assert!(!pick.moonshard);
    assert_eq!(pick.hero_damage, 18_000);
    assert_eq!(pick.hero_healing, 200);
}

#[test]
fn benchmark_rerun_overwrites_instead_of_duplicating() {
    let db = HarvestDatabase::new_in_memory().unwrap();

    for (gpm, xpm) in [(500.0, 550.0), (512.0, 561.0)] {
        upsert_benchmark(
            db.connection(),
            &HeroBenchmarkRow {
                hero_id: HeroId::new(1),
                avg_gpm: gpm,
                avg_xpm: xpm,
            },
        )
        .unwrap();
    }

    assert_eq!(count_benchmarks(db.connection()).unwrap(), 1);
    let row = get_benchmark(db.connection(), HeroId::new(1))
        .unwrap()
        .unwrap();
    assert_eq!((row.avg_gpm, row.avg_xpm), (512.0, 561.0));
}
