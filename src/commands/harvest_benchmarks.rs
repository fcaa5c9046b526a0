//! Benchmark harvester: median gold/xp-per-minute values for every
//! known hero, upserted so re-runs overwrite.

use crate::{
    cli::{types::HeroId, CommonOpts},
    config::Config,
    error::Result,
    opendota::{heroes, http},
    report::{BenchmarkHarvestSummary, HeroOutcome, SkipReason},
    storage::{models::HeroBenchmarkRow, queries::upsert_benchmark},
};
use reqwest::Client;

use super::common::CommandContext;

/// Harvest benchmarks for the full hero list.
///
/// Per-hero fetch/parse failures are recorded and skipped; everything
/// that succeeded is committed once at the end.
pub async fn handle_harvest_benchmarks(opts: &CommonOpts) -> Result<BenchmarkHarvestSummary> {
    let mut ctx = CommandContext::new(opts)?;
    let hero_ids = heroes::hero_ids()?;
    let mut summary = BenchmarkHarvestSummary::default();

    let verbose = ctx.verbose;
    let tx = ctx.db.transaction()?;
    for hero_id in hero_ids {
        match fetch_median(&ctx.client, &ctx.config, hero_id).await {
            Ok(row) => {
                upsert_benchmark(&tx, &row)?;
                summary.upserted += 1;
                if verbose {
                    println!(
                        "✓ hero {}: gpm {:.0}, xpm {:.0}",
                        hero_id, row.avg_gpm, row.avg_xpm
                    );
                }
            }
            Err(err) => {
                let reason = SkipReason::from_error(&err);
                if verbose {
                    println!("⚠ hero {} skipped: {}", hero_id, reason);
                }
                summary.skipped.push(HeroOutcome {
                    hero_id,
                    skipped: Some(reason),
                });
            }
        }
    }
    tx.commit()?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(summary)
}

async fn fetch_median(client: &Client, cfg: &Config, hero_id: HeroId) -> Result<HeroBenchmarkRow> {
    let response = http::get_benchmarks(client, cfg, hero_id).await?;
    let (avg_gpm, avg_xpm) = response.median_values()?;
    Ok(HeroBenchmarkRow {
        hero_id,
        avg_gpm,
        avg_xpm,
    })
}
