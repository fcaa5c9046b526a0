//! CLI argument definitions and parsing structures.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every harvest subcommand.
#[derive(Debug, Args)]
pub struct CommonOpts {
    /// SQLite database file (or set `OPENDOTA_HARVEST_DB` env var).
    #[clap(long)]
    pub db_path: Option<PathBuf>,

    /// OpenDota API base URL (or set `OPENDOTA_API_BASE` env var).
    #[clap(long)]
    pub api_base: Option<String>,

    /// Give up on a request after this many attempts.
    #[clap(long)]
    pub retry_attempts: Option<u32>,

    /// Pause between retry attempts, in milliseconds.
    #[clap(long)]
    pub retry_pause_ms: Option<u64>,

    /// Output the run summary as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Show per-band / per-hero progress while harvesting.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "opendota-harvest", about = "OpenDota match and benchmark harvester")]
pub struct Harvest {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch recent public matches for each rank band and store one row
    /// per match plus one row per participating hero.
    Matches {
        #[clap(flatten)]
        opts: CommonOpts,

        /// Only process this many matches per rank band.
        #[clap(long)]
        match_limit: Option<usize>,
    },

    /// Fetch median gold/xp-per-minute benchmarks for every known hero
    /// and upsert them, overwriting previous values.
    Benchmarks {
        #[clap(flatten)]
        opts: CommonOpts,
    },

    /// Run the full pipeline: schema init, match harvest, then benchmarks.
    All {
        #[clap(flatten)]
        opts: CommonOpts,

        /// Only process this many matches per rank band.
        #[clap(long)]
        match_limit: Option<usize>,
    },
}
