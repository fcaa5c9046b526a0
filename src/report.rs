//! Typed harvest outcomes.
//!
//! Work that is dropped (a band whose list fetch never succeeded, a hero
//! with a malformed benchmark payload) is recorded here instead of being
//! silently discarded, so callers and tests can see exactly what was
//! skipped and why.

use crate::cli::types::HeroId;
use crate::error::HarvestError;
use crate::opendota::RankBand;
use serde::Serialize;
use std::fmt;

/// Why a unit of work was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Every retry attempt failed; carries the final error text.
    RetriesExhausted { detail: String },
    /// The payload arrived but did not have the shape we persist.
    MalformedPayload { detail: String },
    /// A benchmark series was too short to contain the median bucket.
    ShortSeries { detail: String },
}

impl SkipReason {
    /// Classify a harvest error into the reason recorded for the skip.
    pub fn from_error(err: &HarvestError) -> Self {
        let detail = err.to_string();
        match err {
            HarvestError::RetriesExhausted { .. } => SkipReason::RetriesExhausted { detail },
            HarvestError::ShortSeries { .. } => SkipReason::ShortSeries { detail },
            _ => SkipReason::MalformedPayload { detail },
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            SkipReason::RetriesExhausted { detail }
            | SkipReason::MalformedPayload { detail }
            | SkipReason::ShortSeries { detail } => detail,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}

/// What happened to one rank band during a match harvest.
///
/// `skipped` is set when the band was abandoned partway; whatever was
/// inserted before the failure stays committed and is still counted.
#[derive(Debug, Clone, Serialize)]
pub struct BandOutcome {
    pub band: RankBand,
    pub matches_seen: usize,
    pub matches_inserted: usize,
    pub picks_inserted: usize,
    pub skipped: Option<SkipReason>,
}

impl BandOutcome {
    pub fn new(band: RankBand) -> Self {
        Self {
            band,
            matches_seen: 0,
            matches_inserted: 0,
            picks_inserted: 0,
            skipped: None,
        }
    }
}

/// Per-band outcomes of one match harvest run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchHarvestSummary {
    pub bands: Vec<BandOutcome>,
}

impl MatchHarvestSummary {
    pub fn matches_inserted(&self) -> usize {
        self.bands.iter().map(|b| b.matches_inserted).sum()
    }

    pub fn picks_inserted(&self) -> usize {
        self.bands.iter().map(|b| b.picks_inserted).sum()
    }

    pub fn skipped_bands(&self) -> impl Iterator<Item = &BandOutcome> {
        self.bands.iter().filter(|b| b.skipped.is_some())
    }
}

impl fmt::Display for MatchHarvestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} matches and {} hero picks inserted across {} bands",
            self.matches_inserted(),
            self.picks_inserted(),
            self.bands.len()
        )?;
        for band in self.skipped_bands() {
            if let Some(reason) = &band.skipped {
                writeln!(
                    f,
                    "  band {} ({}-{}) incomplete: {}",
                    band.band.name, band.band.min_rank, band.band.max_rank, reason
                )?;
            }
        }
        Ok(())
    }
}

/// What happened to one hero during a benchmark harvest.
#[derive(Debug, Clone, Serialize)]
pub struct HeroOutcome {
    pub hero_id: HeroId,
    pub skipped: Option<SkipReason>,
}

/// Outcome of one benchmark harvest run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkHarvestSummary {
    pub upserted: usize,
    pub skipped: Vec<HeroOutcome>,
}

impl fmt::Display for BenchmarkHarvestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} hero benchmarks upserted, {} heroes skipped",
            self.upserted,
            self.skipped.len()
        )?;
        for hero in &self.skipped {
            if let Some(reason) = &hero.skipped {
                writeln!(f, "  hero {} skipped: {}", hero.hero_id, reason)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opendota::RANK_BANDS;

    #[test]
    fn classify_retries_exhausted() {
        let err = HarvestError::RetriesExhausted {
            url: "u".into(),
            attempts: 3,
            last_status: "503".into(),
        };
        match SkipReason::from_error(&err) {
            SkipReason::RetriesExhausted { .. } => (),
            other => panic!("wrong classification: {other:?}"),
        }
    }

    #[test]
    fn classify_short_series() {
        let err = HarvestError::ShortSeries {
            hero_id: 1,
            len: 2,
            need: 5,
        };
        match SkipReason::from_error(&err) {
            SkipReason::ShortSeries { .. } => (),
            other => panic!("wrong classification: {other:?}"),
        }
    }

    #[test]
    fn classify_json_as_malformed() {
        let json_err = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        match SkipReason::from_error(&HarvestError::Json(json_err)) {
            SkipReason::MalformedPayload { .. } => (),
            other => panic!("wrong classification: {other:?}"),
        }
    }

    #[test]
    fn summary_totals_sum_over_bands() {
        let mut summary = MatchHarvestSummary::default();
        let mut a = BandOutcome::new(RANK_BANDS[0]);
        a.matches_inserted = 3;
        a.picks_inserted = 30;
        let mut b = BandOutcome::new(RANK_BANDS[1]);
        b.matches_inserted = 2;
        b.picks_inserted = 17;
        b.skipped = Some(SkipReason::MalformedPayload {
            detail: "missing field `hero_id`".into(),
        });
        summary.bands = vec![a, b];

        assert_eq!(summary.matches_inserted(), 5);
        assert_eq!(summary.picks_inserted(), 47);
        assert_eq!(summary.skipped_bands().count(), 1);

        let text = summary.to_string();
        assert!(text.contains("5 matches and 47 hero picks"));
        assert!(text.contains("band guardian"));
        assert!(text.contains("missing field"));
    }

    #[test]
    fn summaries_serialize_for_json_output() {
        let mut summary = MatchHarvestSummary::default();
        let mut band = BandOutcome::new(RANK_BANDS[0]);
        band.matches_seen = 1;
        band.skipped = Some(SkipReason::RetriesExhausted {
            detail: "503".into(),
        });
        summary.bands = vec![band];

        let json = serde_json::to_string_pretty(&summary).unwrap();
        assert!(json.contains("\"herald\""));
        assert!(json.contains("RetriesExhausted"));

        let benchmarks = BenchmarkHarvestSummary {
            upserted: 3,
            skipped: vec![],
        };
        let json = serde_json::to_string_pretty(&benchmarks).unwrap();
        assert!(json.contains("\"upserted\": 3"));
    }

    #[test]
    fn benchmark_summary_display_lists_skips() {
        let summary = BenchmarkHarvestSummary {
            upserted: 120,
            skipped: vec![HeroOutcome {
                hero_id: HeroId::new(24),
                skipped: Some(SkipReason::ShortSeries {
                    detail: "too short".into(),
                }),
            }],
        };
        let text = summary.to_string();
        assert!(text.contains("120 hero benchmarks upserted"));
        assert!(text.contains("hero 24 skipped"));
    }
}
