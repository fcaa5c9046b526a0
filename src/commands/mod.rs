//! Command implementations for the OpenDota harvester CLI.

pub mod common;
pub mod harvest_all;
pub mod harvest_benchmarks;
pub mod harvest_matches;
