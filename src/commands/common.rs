//! Shared setup for command handlers.

use crate::{
    cli::CommonOpts,
    config::Config,
    error::Result,
    storage::HarvestDatabase,
};
use reqwest::Client;
use std::time::Duration;

/// Resources every harvester needs: resolved config, an open database
/// (schema initialized), and one HTTP client.
pub struct CommandContext {
    pub config: Config,
    pub db: HarvestDatabase,
    pub client: Client,
    pub verbose: bool,
}

impl CommandContext {
    /// Resolve configuration (CLI flags override env vars override
    /// defaults), open the database, and ensure the schema exists.
    pub fn new(opts: &CommonOpts) -> Result<Self> {
        let mut config = Config::from_env()?;
        if let Some(path) = &opts.db_path {
            config.db_path = path.clone();
        }
        if let Some(base) = &opts.api_base {
            config.api_base = base.clone();
        }
        if let Some(attempts) = opts.retry_attempts {
            config.retry.max_attempts = attempts.max(1);
        }
        if let Some(ms) = opts.retry_pause_ms {
            config.retry.pause = Duration::from_millis(ms);
        }

        if opts.verbose {
            println!("Opening database at {}", config.db_path.display());
        }
        let db = HarvestDatabase::new(&config.db_path)?;
        let client = Client::new();

        Ok(Self {
            config,
            db,
            client,
            verbose: opts.verbose,
        })
    }
}
