//! Full pipeline: match harvest followed by benchmark harvest.

use crate::{cli::CommonOpts, error::Result};

use super::{
    harvest_benchmarks::handle_harvest_benchmarks, harvest_matches::handle_harvest_matches,
};

/// Run both harvesters sequentially against the same database.
///
/// Each harvester opens its own connection (and re-runs the idempotent
/// schema DDL), so a failure in one leaves the other's work untouched.
pub async fn handle_harvest_all(opts: &CommonOpts, match_limit: Option<usize>) -> Result<()> {
    let matches = handle_harvest_matches(opts, match_limit).await?;
    let benchmarks = handle_harvest_benchmarks(opts).await?;

    if opts.verbose {
        println!(
            "Run complete: {} matches, {} picks, {} benchmarks",
            matches.matches_inserted(),
            matches.picks_inserted(),
            benchmarks.upserted
        );
    }
    Ok(())
}
