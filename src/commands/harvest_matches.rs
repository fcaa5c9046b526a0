//! Match harvester: recent public matches plus one hero-pick row per
//! participant, for each of the eight rank bands.

use crate::{
    cli::CommonOpts,
    error::Result,
    opendota::{http, RankBand, RANK_BANDS},
    report::{BandOutcome, MatchHarvestSummary, SkipReason},
    storage::{
        models::{HeroPickRow, MatchRow},
        queries::{insert_hero_pick, insert_match},
    },
};

use super::common::CommandContext;

/// Harvest every rank band and return the per-band outcomes.
///
/// Bands are independent: a band whose list fetch never succeeds, or
/// that hits a malformed payload partway through, is recorded as skipped
/// and the next band proceeds. Each band commits once; work done before
/// a mid-band failure stays committed.
pub async fn handle_harvest_matches(
    opts: &CommonOpts,
    match_limit: Option<usize>,
) -> Result<MatchHarvestSummary> {
    let mut ctx = CommandContext::new(opts)?;
    let mut summary = MatchHarvestSummary::default();

    for band in RANK_BANDS {
        if ctx.verbose {
            println!(
                "Harvesting band {} ({}-{})...",
                band.name, band.min_rank, band.max_rank
            );
        }

        let outcome = harvest_band(&mut ctx, band, match_limit).await?;

        if ctx.verbose {
            match &outcome.skipped {
                None => println!(
                    "✓ band {}: {} matches, {} picks",
                    band.name, outcome.matches_inserted, outcome.picks_inserted
                ),
                Some(reason) => println!("⚠ band {} incomplete: {}", band.name, reason),
            }
        }
        summary.bands.push(outcome);
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(summary)
}

/// Process one rank band inside a single transaction.
///
/// Only fetch/parse failures become a skip; database errors propagate
/// and abort the run.
async fn harvest_band(
    ctx: &mut CommandContext,
    band: RankBand,
    match_limit: Option<usize>,
) -> Result<BandOutcome> {
    let mut outcome = BandOutcome::new(band);

    let mut matches = match http::get_public_matches(&ctx.client, &ctx.config, &band).await {
        Ok(matches) => matches,
        Err(err) => {
            outcome.skipped = Some(SkipReason::from_error(&err));
            return Ok(outcome);
        }
    };
    if let Some(limit) = match_limit {
        matches.truncate(limit);
    }
    outcome.matches_seen = matches.len();

    let tx = ctx.db.transaction()?;
    for summary in &matches {
        if insert_match(&tx, &MatchRow::from_summary(summary))? {
            outcome.matches_inserted += 1;
        }

        match http::get_match_detail(&ctx.client, &ctx.config, summary.match_id).await {
            Ok(detail) => {
                for player in &detail.players {
                    if insert_hero_pick(&tx, &HeroPickRow::from_player(summary.match_id, player))? {
                        outcome.picks_inserted += 1;
                    }
                }
            }
            Err(err) => {
                // Abandon the rest of the band but keep what landed.
                outcome.skipped = Some(SkipReason::from_error(&err));
                break;
            }
        }
    }
    tx.commit()?;

    Ok(outcome)
}
