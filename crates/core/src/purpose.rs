//! Learner purpose categories.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;

/// Why a learner studies Japanese.
///
/// Purpose biases the lesson-type balance, the monthly narrative and how
/// many lessons a month of progress takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// Anime, manga, games and other fandoms
    Anime,
    /// Friends and partners
    Friends,
    /// Travel in Japan
    Travel,
    /// History, arts and traditional culture
    Culture,
    /// Moving to and living in Japan
    Live,
    /// Jobs and business use
    Work,
    /// Self-improvement and lifestyle
    Beauty,
    /// Learning for the challenge of it
    Challenge,
    /// Anything else
    Other,
}

impl Purpose {
    /// Purpose used when a key is missing or unrecognized.
    pub const DEFAULT: Purpose = Purpose::Other;

    /// All purposes in display order.
    pub const ALL: [Purpose; 9] = [
        Purpose::Anime,
        Purpose::Friends,
        Purpose::Travel,
        Purpose::Culture,
        Purpose::Live,
        Purpose::Work,
        Purpose::Beauty,
        Purpose::Challenge,
        Purpose::Other,
    ];

    /// Stable string key.
    pub fn key(self) -> &'static str {
        match self {
            Purpose::Anime => "anime",
            Purpose::Friends => "friends",
            Purpose::Travel => "travel",
            Purpose::Culture => "culture",
            Purpose::Live => "live",
            Purpose::Work => "work",
            Purpose::Beauty => "beauty",
            Purpose::Challenge => "challenge",
            Purpose::Other => "other",
        }
    }

    /// Position in [`Purpose::ALL`]; indexes per-purpose tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Scales the lessons needed per month of progress.
    pub fn lesson_multiplier(self) -> f64 {
        match self {
            Purpose::Anime => 1.0,
            Purpose::Friends => 1.1,
            Purpose::Travel => 0.9,
            Purpose::Culture => 0.9,
            Purpose::Live => 1.1,
            Purpose::Work => 1.2,
            Purpose::Beauty => 0.8,
            Purpose::Challenge => 1.0,
            Purpose::Other => 1.0,
        }
    }

    /// Accent color for the purpose badge.
    pub fn color(self) -> &'static str {
        match self {
            Purpose::Anime => "#e11d48",
            Purpose::Friends => "#ec4899",
            Purpose::Travel => "#0ea5e9",
            Purpose::Culture => "#f59e0b",
            Purpose::Live => "#22c55e",
            Purpose::Work => "#6366f1",
            Purpose::Beauty => "#a855f7",
            Purpose::Challenge => "#f97316",
            Purpose::Other => "#64748b",
        }
    }

    /// Lenient lookup: unknown keys fall back to [`Purpose::DEFAULT`].
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or(Self::DEFAULT)
    }
}

impl Default for Purpose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Purpose {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Purpose::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| CoreError::UnknownPurpose(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for purpose in Purpose::ALL {
            assert_eq!(purpose.key().parse::<Purpose>(), Ok(purpose));
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, purpose) in Purpose::ALL.iter().enumerate() {
            assert_eq!(purpose.index(), i);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            "gardening".parse::<Purpose>(),
            Err(CoreError::UnknownPurpose("gardening".to_string()))
        );
        assert_eq!(Purpose::from_key_or_default("gardening"), Purpose::Other);
        assert_eq!(Purpose::from_key_or_default(" Work "), Purpose::Work);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Purpose::Work.lesson_multiplier(), 1.2);
        assert_eq!(Purpose::Beauty.lesson_multiplier(), 0.8);
        assert_eq!(Purpose::Other.lesson_multiplier(), 1.0);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Purpose::Live).unwrap();
        assert_eq!(json, "\"live\"");
    }
}
