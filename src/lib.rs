//! OpenDota Harvester Library
//!
//! A small ETL tool that pulls public match records and hero benchmark
//! statistics from the OpenDota API and persists them into a local
//! SQLite database with conflict-safe writes.
//!
//! ## What it stores
//!
//! - **Matches**: one insert-once row per public match (rank tier,
//!   outcome), for each of the eight rank bands herald through immortal
//! - **Hero picks**: one insert-once row per (match, hero) with loadout,
//!   combat, and economy fields
//! - **Hero benchmarks**: one upserted row per hero with the median
//!   gold/xp-per-minute percentile values
//!
//! Re-running is idempotent: duplicate matches and picks are ignored,
//! benchmarks are overwritten. Transient HTTP failures are retried on a
//! fixed interval up to a bounded attempt count; work that still cannot
//! complete is skipped and reported, never silently dropped.
//!
//! ## Environment configuration
//!
//! ```bash
//! export OPENDOTA_HARVEST_DB=/var/lib/harvest/harvest.db   # optional
//! export OPENDOTA_API_BASE=https://api.opendota.com/api    # optional
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod opendota;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{HeroId, MatchId};
pub use config::{Config, RetryPolicy, API_BASE_ENV_VAR, DB_PATH_ENV_VAR};
pub use error::{HarvestError, Result};
pub use opendota::{RankBand, RANK_BANDS};
