//! Run configuration: database path, API base URL, and retry policy.
//!
//! Everything the harvesters need from the environment is resolved once
//! here and passed down explicitly, so the fetch/persist code never reads
//! env vars on its own.

use crate::error::{HarvestError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Env var overriding the SQLite database file path.
pub const DB_PATH_ENV_VAR: &str = "OPENDOTA_HARVEST_DB";

/// Env var overriding the OpenDota API base URL (useful for test servers).
pub const API_BASE_ENV_VAR: &str = "OPENDOTA_API_BASE";

/// Default base path for the OpenDota public API.
pub const DEFAULT_API_BASE: &str = "https://api.opendota.com/api";

/// Bounded fixed-interval retry policy applied to every fetch.
///
/// The same policy covers list, detail, and benchmark requests; the pause
/// and ceiling are configurable rather than baked in per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            pause: Duration::from_secs(1),
        }
    }
}

/// Resolved configuration handed to every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub api_base: String,
    pub retry: RetryPolicy,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// The database lands in the platform cache directory unless
    /// `OPENDOTA_HARVEST_DB` points elsewhere.
    pub fn from_env() -> Result<Self> {
        let db_path = match std::env::var_os(DB_PATH_ENV_VAR) {
            Some(path) => PathBuf::from(path),
            None => Self::default_db_path()?,
        };
        let api_base = std::env::var(API_BASE_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            db_path,
            api_base,
            retry: RetryPolicy::default(),
        })
    }

    /// Default database location under the platform cache directory.
    pub fn default_db_path() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir().ok_or_else(|| HarvestError::Config {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("opendota-harvest").join("harvest.db"))
    }
}
