//! Proficiency bands over the 0-100 score scale.

use serde::{Deserialize, Serialize};

/// One named tier of the proficiency scale.
///
/// A band covers `[min_score, max_score)` and carries the study hours
/// needed to cross it from bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProficiencyBand {
    /// Band name (N5 .. N1)
    pub name: &'static str,

    /// Inclusive lower bound
    pub min_score: f64,

    /// Exclusive upper bound
    pub max_score: f64,

    /// Hours to complete the whole band
    pub hours: f64,

    /// Chart color
    pub color: &'static str,
}

impl ProficiencyBand {
    /// Width of the band on the score scale.
    pub fn width(&self) -> f64 {
        self.max_score - self.min_score
    }

    /// Whether `score` falls inside `[min_score, max_score)`.
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min_score && score < self.max_score
    }
}

/// The five bands, ascending and contiguous over [0, 100].
pub const BANDS: [ProficiencyBand; 5] = [
    ProficiencyBand { name: "N5", min_score: 0.0, max_score: 20.0, hours: 150.0, color: "#22c55e" },
    ProficiencyBand { name: "N4", min_score: 20.0, max_score: 40.0, hours: 300.0, color: "#84cc16" },
    ProficiencyBand { name: "N3", min_score: 40.0, max_score: 60.0, hours: 450.0, color: "#eab308" },
    ProficiencyBand { name: "N2", min_score: 60.0, max_score: 80.0, hours: 600.0, color: "#f97316" },
    ProficiencyBand { name: "N1", min_score: 80.0, max_score: 100.0, hours: 900.0, color: "#ef4444" },
];

/// Band containing `score`.
///
/// Scores at or above 100 (and anything that matches no band, such as NaN
/// or negatives) resolve to the last band.
pub fn band_for_score(score: f64) -> &'static ProficiencyBand {
    BANDS
        .iter()
        .find(|band| band.contains(score))
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Index of the band containing `score`, with the same fallback as
/// [`band_for_score`].
pub fn band_index(score: f64) -> usize {
    BANDS
        .iter()
        .position(|band| band.contains(score))
        .unwrap_or(BANDS.len() - 1)
}

/// Coarse wording tier for describing a score.
///
/// Unlike the bands, the top tier is split so that 95+ reads as native.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTier {
    /// Absolute beginner
    N5,
    /// Basic everyday phrases
    N4,
    /// Everyday conversation
    N3,
    /// Fluent in most situations
    N2,
    /// Advanced
    N1,
    /// Near-native, 95 and up
    Native,
}

impl LevelTier {
    /// All tiers in ascending order.
    pub const ALL: [LevelTier; 6] = [
        LevelTier::N5,
        LevelTier::N4,
        LevelTier::N3,
        LevelTier::N2,
        LevelTier::N1,
        LevelTier::Native,
    ];

    /// Tier for a score.
    pub fn for_score(score: f64) -> Self {
        if score < 20.0 {
            LevelTier::N5
        } else if score < 40.0 {
            LevelTier::N4
        } else if score < 60.0 {
            LevelTier::N3
        } else if score < 80.0 {
            LevelTier::N2
        } else if score < 95.0 {
            LevelTier::N1
        } else {
            LevelTier::Native
        }
    }

    /// Position in [`LevelTier::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_partition_scale() {
        assert_eq!(BANDS[0].min_score, 0.0);
        assert_eq!(BANDS[BANDS.len() - 1].max_score, 100.0);
        for pair in BANDS.windows(2) {
            assert_eq!(pair[0].max_score, pair[1].min_score);
            assert!(pair[0].min_score < pair[0].max_score);
        }
    }

    #[test]
    fn test_band_for_score_boundaries() {
        assert_eq!(band_for_score(0.0).name, "N5");
        assert_eq!(band_for_score(19.9).name, "N5");
        assert_eq!(band_for_score(20.0).name, "N4");
        assert_eq!(band_for_score(79.99).name, "N2");
        assert_eq!(band_for_score(80.0).name, "N1");
    }

    #[test]
    fn test_band_for_score_upper_guard() {
        assert_eq!(band_for_score(100.0).name, "N1");
        assert_eq!(band_for_score(140.0).name, "N1");
        assert_eq!(band_for_score(-5.0).name, "N1");
        assert_eq!(band_index(f64::NAN), 4);
    }

    #[test]
    fn test_level_tier() {
        assert_eq!(LevelTier::for_score(0.0), LevelTier::N5);
        assert_eq!(LevelTier::for_score(45.0), LevelTier::N3);
        assert_eq!(LevelTier::for_score(94.9), LevelTier::N1);
        assert_eq!(LevelTier::for_score(95.0), LevelTier::Native);
        assert_eq!(LevelTier::Native.index(), 5);
    }
}
