//! HTTP access to the OpenDota API with bounded fixed-interval retry.

use crate::cli::types::{HeroId, MatchId};
use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::opendota::types::{BenchmarkResponse, MatchDetail, PublicMatch};
use crate::opendota::RankBand;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// GET `url` and decode the JSON body, retrying on transport errors and
/// non-2xx statuses.
///
/// Sleeps `cfg.retry.pause` between attempts and gives up after
/// `cfg.retry.max_attempts`, reporting the last status seen. A body that
/// arrives but fails to decode is not retried; it is a payload problem,
/// not a transient one.
async fn get_json_with_retry<T: DeserializeOwned>(
    client: &Client,
    cfg: &Config,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let mut last_status = "no response".to_string();

    for attempt in 1..=cfg.retry.max_attempts {
        match client.get(url).query(query).send().await {
            Ok(resp) if resp.status().is_success() => {
                return Ok(resp.json::<T>().await?);
            }
            Ok(resp) => {
                last_status = resp.status().to_string();
            }
            Err(err) => {
                last_status = err.to_string();
            }
        }

        if attempt < cfg.retry.max_attempts {
            tokio::time::sleep(cfg.retry.pause).await;
        }
    }

    Err(HarvestError::RetriesExhausted {
        url: url.to_string(),
        attempts: cfg.retry.max_attempts,
        last_status,
    })
}

/// Recent public matches within one rank band.
pub async fn get_public_matches(
    client: &Client,
    cfg: &Config,
    band: &RankBand,
) -> Result<Vec<PublicMatch>> {
    let url = format!("{}/publicMatches", cfg.api_base);
    let query = [
        ("min_rank", band.min_rank.to_string()),
        ("max_rank", band.max_rank.to_string()),
    ];
    get_json_with_retry(client, cfg, &url, &query).await
}

/// Full detail for one match, including the player array.
pub async fn get_match_detail(
    client: &Client,
    cfg: &Config,
    match_id: MatchId,
) -> Result<MatchDetail> {
    let url = format!("{}/matches/{}", cfg.api_base, match_id);
    get_json_with_retry(client, cfg, &url, &[]).await
}

/// Percentile benchmark series for one hero.
pub async fn get_benchmarks(
    client: &Client,
    cfg: &Config,
    hero_id: HeroId,
) -> Result<BenchmarkResponse> {
    let url = format!("{}/benchmarks", cfg.api_base);
    let query = [("hero_id", hero_id.to_string())];
    get_json_with_retry(client, cfg, &url, &query).await
}
