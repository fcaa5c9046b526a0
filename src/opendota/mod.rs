//! OpenDota API client: endpoint wrappers, payload types, and the fixed
//! reference data the harvesters iterate over.

use serde::Serialize;

pub mod heroes;
pub mod http;
pub mod types;

/// A skill-tier bracket used to filter public matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankBand {
    pub min_rank: u8,
    pub max_rank: u8,
    pub name: &'static str,
}

/// The eight fixed rank bands harvested on every run, herald through
/// immortal.
pub const RANK_BANDS: [RankBand; 8] = [
    RankBand { min_rank: 10, max_rank: 15, name: "herald" },
    RankBand { min_rank: 20, max_rank: 25, name: "guardian" },
    RankBand { min_rank: 30, max_rank: 35, name: "crusader" },
    RankBand { min_rank: 40, max_rank: 45, name: "archon" },
    RankBand { min_rank: 50, max_rank: 55, name: "legend" },
    RankBand { min_rank: 60, max_rank: 65, name: "ancient" },
    RankBand { min_rank: 70, max_rank: 75, name: "divine" },
    RankBand { min_rank: 80, max_rank: 85, name: "immortal" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bands_cover_herald_through_immortal() {
        assert_eq!(RANK_BANDS.len(), 8);
        assert_eq!(RANK_BANDS[0].min_rank, 10);
        assert_eq!(RANK_BANDS[0].name, "herald");
        assert_eq!(RANK_BANDS[7].max_rank, 85);
        assert_eq!(RANK_BANDS[7].name, "immortal");
    }

    #[test]
    fn rank_bands_are_disjoint_and_ascending() {
        for pair in RANK_BANDS.windows(2) {
            assert!(pair[0].max_rank < pair[1].min_rank);
        }
        for band in &RANK_BANDS {
            assert!(band.min_rank < band.max_rank);
        }
    }
}
