//! Conflict-safe write and read operations.
//!
//! These take a plain `&Connection` so they work identically on the
//! database handle and inside a `Transaction` (which derefs to one).

use super::models::{HeroBenchmarkRow, HeroPickRow, MatchRow};
use crate::cli::types::{HeroId, MatchId};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Insert a match, ignoring duplicates. Returns whether a row landed.
pub fn insert_match(conn: &Connection, row: &MatchRow) -> Result<bool> {
    let affected = conn.execute(
        "INSERT OR IGNORE INTO matches (match_id, avg_rank, radiant_win)
         VALUES (?, ?, ?)",
        params![row.match_id.as_u64(), row.avg_rank, row.radiant_win],
    )?;
    Ok(affected > 0)
}

/// Insert a hero pick, ignoring duplicates on (match_id, hero_id).
/// Returns whether a row landed.
pub fn insert_hero_pick(conn: &Connection, row: &HeroPickRow) -> Result<bool> {
    let affected = conn.execute(
        "INSERT OR IGNORE INTO hero_picks
         (match_id, hero_id, team, facet,
          item_0, item_1, item_2, item_3, item_4, item_5,
          backpack_0, backpack_1, backpack_2, neutral_item,
          kills, deaths, assists, gold_per_min, xp_per_min, level, net_worth,
          aghanims_scepter, aghanims_shard, moonshard,
          hero_damage, tower_damage, hero_healing)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            row.match_id.as_u64(),
            row.hero_id.as_u16(),
            row.team,
            row.facet,
            row.items[0],
            row.items[1],
            row.items[2],
            row.items[3],
            row.items[4],
            row.items[5],
            row.backpack[0],
            row.backpack[1],
            row.backpack[2],
            row.neutral_item,
            row.kills,
            row.deaths,
            row.assists,
            row.gold_per_min,
            row.xp_per_min,
            row.level,
            row.net_worth,
            row.aghanims_scepter,
            row.aghanims_shard,
            row.moonshard,
            row.hero_damage,
            row.tower_damage,
            row.hero_healing,
        ],
    )?;
    Ok(affected > 0)
}

/// Insert or overwrite a hero's benchmark values.
pub fn upsert_benchmark(conn: &Connection, row: &HeroBenchmarkRow) -> Result<()> {
    conn.execute(
        "INSERT INTO hero_benchmarks (hero_id, avg_gpm, avg_xpm)
         VALUES (?, ?, ?)
         ON CONFLICT(hero_id) DO UPDATE SET
            avg_gpm = excluded.avg_gpm,
            avg_xpm = excluded.avg_xpm",
        params![row.hero_id.as_u16(), row.avg_gpm, row.avg_xpm],
    )?;
    Ok(())
}

pub fn get_match(conn: &Connection, match_id: MatchId) -> Result<Option<MatchRow>> {
    let row = conn
        .query_row(
            "SELECT match_id, avg_rank, radiant_win FROM matches WHERE match_id = ?",
            params![match_id.as_u64()],
            |row| {
                Ok(MatchRow {
                    match_id: MatchId::new(row.get(0)?),
                    avg_rank: row.get(1)?,
                    radiant_win: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

/// All hero picks recorded for a match, in hero-id order.
pub fn picks_for_match(conn: &Connection, match_id: MatchId) -> Result<Vec<HeroPickRow>> {
    let mut stmt = conn.prepare(
        "SELECT match_id, hero_id, team, facet,
                item_0, item_1, item_2, item_3, item_4, item_5,
                backpack_0, backpack_1, backpack_2, neutral_item,
                kills, deaths, assists, gold_per_min, xp_per_min, level, net_worth,
                aghanims_scepter, aghanims_shard, moonshard,
                hero_damage, tower_damage, hero_healing
         FROM hero_picks
         WHERE match_id = ?
         ORDER BY hero_id",
    )?;

    let rows = stmt.query_map(params![match_id.as_u64()], row_to_hero_pick)?;

    let mut picks = Vec::new();
    for row in rows {
        picks.push(row?);
    }
    Ok(picks)
}

pub fn get_benchmark(conn: &Connection, hero_id: HeroId) -> Result<Option<HeroBenchmarkRow>> {
    let row = conn
        .query_row(
            "SELECT hero_id, avg_gpm, avg_xpm FROM hero_benchmarks WHERE hero_id = ?",
            params![hero_id.as_u16()],
            |row| {
                Ok(HeroBenchmarkRow {
                    hero_id: HeroId::new(row.get(0)?),
                    avg_gpm: row.get(1)?,
                    avg_xpm: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

pub fn count_matches(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?)
}

pub fn count_hero_picks(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM hero_picks", [], |row| row.get(0))?)
}

pub fn count_benchmarks(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM hero_benchmarks", [], |row| row.get(0))?)
}

fn row_to_hero_pick(row: &Row) -> rusqlite::Result<HeroPickRow> {
    Ok(HeroPickRow {
        match_id: MatchId::new(row.get(0)?),
        hero_id: HeroId::new(row.get(1)?),
        team: row.get(2)?,
        facet: row.get(3)?,
        items: [
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
            row.get(9)?,
        ],
        backpack: [row.get(10)?, row.get(11)?, row.get(12)?],
        neutral_item: row.get(13)?,
        kills: row.get(14)?,
        deaths: row.get(15)?,
        assists: row.get(16)?,
        gold_per_min: row.get(17)?,
        xp_per_min: row.get(18)?,
        level: row.get(19)?,
        net_worth: row.get(20)?,
        aghanims_scepter: row.get(21)?,
        aghanims_shard: row.get(22)?,
        moonshard: row.get(23)?,
        hero_damage: row.get(24)?,
        tower_damage: row.get(25)?,
        hero_healing: row.get(26)?,
    })
}
