//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use opendota_harvest::{
    cli::{Commands, Harvest},
    commands::{
        harvest_all::handle_harvest_all, harvest_benchmarks::handle_harvest_benchmarks,
        harvest_matches::handle_harvest_matches,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Harvest::parse();

    match app.command {
        Commands::Matches { opts, match_limit } => {
            handle_harvest_matches(&opts, match_limit).await?;
        }
        Commands::Benchmarks { opts } => {
            handle_harvest_benchmarks(&opts).await?;
        }
        Commands::All { opts, match_limit } => {
            handle_harvest_all(&opts, match_limit).await?;
        }
    }

    Ok(())
}
