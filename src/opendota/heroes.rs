//! Hero-id reference data.
//!
//! Valve's hero id space has gaps (24 was never assigned, and the ids
//! above 114 are sparse), so the known-good list ships as a data file
//! instead of being derived from a range.

use crate::cli::types::HeroId;
use crate::error::Result;
use serde::Deserialize;

const HERO_IDS_JSON: &str = include_str!("../../data/hero_ids.json");

#[derive(Debug, Deserialize)]
struct HeroIdFile {
    hero_ids: Vec<HeroId>,
}

/// All hero ids the benchmark harvester iterates over.
pub fn hero_ids() -> Result<Vec<HeroId>> {
    let file: HeroIdFile = serde_json::from_str(HERO_IDS_JSON)?;
    Ok(file.hero_ids)
}
