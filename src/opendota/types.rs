//! Serde payload structs for the OpenDota endpoints we consume.
//!
//! Unknown wire fields are ignored; a *missing* field fails
//! deserialization, which the harvesters surface as a skipped unit of
//! work rather than a crash.

use crate::cli::types::{HeroId, MatchId};
use crate::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};

/// Percentile bucket index holding the median value in OpenDota's
/// benchmark series (p1, p5, p10, p25, p50, ...).
pub const MEDIAN_BUCKET: usize = 4;

/// One entry from `GET /publicMatches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicMatch {
    pub match_id: MatchId,
    /// Average rank tier of the participants; null for unranked lobbies.
    pub avg_rank_tier: Option<i64>,
    pub radiant_win: bool,
}

/// Response of `GET /matches/{id}`, reduced to the fields we persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetail {
    pub match_id: MatchId,
    pub players: Vec<MatchPlayer>,
}

/// One player's slot within a match detail payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub hero_id: HeroId,
    pub team_number: i64,
    pub hero_variant: i64,
    pub item_0: i64,
    pub item_1: i64,
    pub item_2: i64,
    pub item_3: i64,
    pub item_4: i64,
    pub item_5: i64,
    pub backpack_0: i64,
    pub backpack_1: i64,
    pub backpack_2: i64,
    pub item_neutral: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub gold_per_min: i64,
    pub xp_per_min: i64,
    pub level: i64,
    pub net_worth: i64,
    /// The upgrade flags arrive as 0/1 integers on the wire.
    pub aghanims_scepter: i64,
    pub aghanims_shard: i64,
    pub moonshard: i64,
    pub hero_damage: i64,
    pub tower_damage: i64,
    pub hero_healing: i64,
}

impl MatchPlayer {
    /// The six-slot item loadout, in slot order.
    pub fn items(&self) -> [i64; 6] {
        [
            self.item_0, self.item_1, self.item_2, self.item_3, self.item_4, self.item_5,
        ]
    }

    /// The three-slot backpack, in slot order.
    pub fn backpack(&self) -> [i64; 3] {
        [self.backpack_0, self.backpack_1, self.backpack_2]
    }

    pub fn has_scepter(&self) -> bool {
        self.aghanims_scepter != 0
    }

    pub fn has_shard(&self) -> bool {
        self.aghanims_shard != 0
    }

    pub fn has_moonshard(&self) -> bool {
        self.moonshard != 0
    }
}

/// One percentile bucket of a benchmark series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PercentileBucket {
    pub percentile: f64,
    pub value: f64,
}

/// The two benchmark series we read for each hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    pub gold_per_min: Vec<PercentileBucket>,
    pub xp_per_min: Vec<PercentileBucket>,
}

/// Response of `GET /benchmarks?hero_id=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResponse {
    pub hero_id: HeroId,
    pub result: BenchmarkSeries,
}

impl BenchmarkResponse {
    /// Median gold-per-minute and xp-per-minute values.
    ///
    /// Fails with `ShortSeries` when either series has too few buckets to
    /// contain the median.
    pub fn median_values(&self) -> Result<(f64, f64)> {
        let gpm = Self::bucket_value(&self.result.gold_per_min, self.hero_id)?;
        let xpm = Self::bucket_value(&self.result.xp_per_min, self.hero_id)?;
        Ok((gpm, xpm))
    }

    fn bucket_value(series: &[PercentileBucket], hero_id: HeroId) -> Result<f64> {
        series
            .get(MEDIAN_BUCKET)
            .map(|bucket| bucket.value)
            .ok_or(HarvestError::ShortSeries {
                hero_id: hero_id.as_u16(),
                len: series.len(),
                need: MEDIAN_BUCKET + 1,
            })
    }
}
