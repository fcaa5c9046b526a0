//! Error types for the OpenDota harvester.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse numeric argument: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{url} still failing after {attempts} attempts (last: {last_status})")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last_status: String,
    },

    #[error("Benchmark series for hero {hero_id} has {len} buckets, need at least {need}")]
    ShortSeries {
        hero_id: u16,
        len: usize,
        need: usize,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for HarvestError {
    fn from(err: anyhow::Error) -> Self {
        HarvestError::Storage {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anyhow_errors_land_in_storage_variant() {
        let err = HarvestError::from(anyhow::anyhow!("disk full"));
        match err {
            HarvestError::Storage { message } => assert!(message.contains("disk full")),
            other => panic!("expected Storage variant, got {other:?}"),
        }
    }

    #[test]
    fn database_error_conversion() {
        let db_err = rusqlite::Error::InvalidColumnType(
            0,
            "avg_rank".to_string(),
            rusqlite::types::Type::Null,
        );
        match HarvestError::from(db_err) {
            HarvestError::Database(_) => (),
            other => panic!("expected Database variant, got {other:?}"),
        }
    }

    #[test]
    fn retries_exhausted_display_names_the_url() {
        let err = HarvestError::RetriesExhausted {
            url: "https://api.opendota.com/api/publicMatches".to_string(),
            attempts: 60,
            last_status: "429 Too Many Requests".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("publicMatches"));
        assert!(msg.contains("60 attempts"));
        assert!(msg.contains("429"));
    }

    #[test]
    fn short_series_display() {
        let err = HarvestError::ShortSeries {
            hero_id: 14,
            len: 3,
            need: 5,
        };
        assert_eq!(
            err.to_string(),
            "Benchmark series for hero 14 has 3 buckets, need at least 5"
        );
    }
}
