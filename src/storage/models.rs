//! Row models for the harvest database.

use crate::cli::types::{HeroId, MatchId};
use crate::opendota::types::{MatchPlayer, PublicMatch};
use serde::{Deserialize, Serialize};

/// One public match. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub match_id: MatchId,
    /// Average rank tier of the participants; null for unranked lobbies.
    pub avg_rank: Option<i64>,
    pub radiant_win: bool,
}

impl MatchRow {
    pub fn from_summary(summary: &PublicMatch) -> Self {
        Self {
            match_id: summary.match_id,
            avg_rank: summary.avg_rank_tier,
            radiant_win: summary.radiant_win,
        }
    }
}

/// One player's participation record within one match.
///
/// The fixed-length `items`/`backpack` arrays carry the six-slot loadout
/// and three-slot backpack invariants; a row can only be built from a
/// payload that has every slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroPickRow {
    pub match_id: MatchId,
    pub hero_id: HeroId,
    pub team: i64,
    pub facet: i64,
    pub items: [i64; 6],
    pub backpack: [i64; 3],
    pub neutral_item: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub gold_per_min: i64,
    pub xp_per_min: i64,
    pub level: i64,
    pub net_worth: i64,
    pub aghanims_scepter: bool,
    pub aghanims_shard: bool,
    pub moonshard: bool,
    pub hero_damage: i64,
    pub tower_damage: i64,
    pub hero_healing: i64,
}

impl HeroPickRow {
    /// Extract the persisted fields from one player slot of a match
    /// detail payload.
    pub fn from_player(match_id: MatchId, player: &MatchPlayer) -> Self {
        Self {
            match_id,
            hero_id: player.hero_id,
            team: player.team_number,
            facet: player.hero_variant,
            items: player.items(),
            backpack: player.backpack(),
            neutral_item: player.item_neutral,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            gold_per_min: player.gold_per_min,
            xp_per_min: player.xp_per_min,
            level: player.level,
            net_worth: player.net_worth,
            aghanims_scepter: player.has_scepter(),
            aghanims_shard: player.has_shard(),
            moonshard: player.has_moonshard(),
            hero_damage: player.hero_damage,
            tower_damage: player.tower_damage,
            hero_healing: player.hero_healing,
        }
    }
}

/// Reference median performance values for one hero. Upserted: the
/// latest harvest wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBenchmarkRow {
    pub hero_id: HeroId,
    pub avg_gpm: f64,
    pub avg_xpm: f64,
}
