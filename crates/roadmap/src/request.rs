//! Roadmap inputs and caller-side validation.

use serde::{Deserialize, Serialize};
use sensei_core::Purpose;

/// Errors for inputs that would produce a meaningless plan.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoadmapError {
    /// Score outside the 0-100 scale
    #[error("{field} score {value} is outside 0-100")]
    ScoreOutOfRange {
        /// Which input
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Plan with no months
    #[error("a plan needs at least one month")]
    ZeroMonths,

    /// Target not above the current score
    #[error("target score {target} must be higher than current score {current}")]
    NoGain {
        /// Current score
        current: f64,
        /// Target score
        target: f64,
    },
}

/// Result type for roadmap validation.
pub type Result<T> = std::result::Result<T, RoadmapError>;

/// The scalar inputs of a roadmap; also what gets persisted on save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadmapRequest {
    /// Current proficiency, 0-100
    pub current_score: f64,

    /// Target proficiency, 0-100
    pub target_score: f64,

    /// Learning purpose
    pub purpose: Purpose,

    /// Plan length in months
    pub months: u32,
}

impl RoadmapRequest {
    /// Create a request.
    pub fn new(current_score: f64, target_score: f64, purpose: Purpose, months: u32) -> Self {
        Self { current_score, target_score, purpose, months }
    }

    /// Score gained over the plan.
    pub fn gain(&self) -> f64 {
        self.target_score - self.current_score
    }

    /// Copy with both scores clamped into 0-100.
    pub fn clamped(&self) -> Self {
        Self {
            current_score: clamp_score(self.current_score),
            target_score: clamp_score(self.target_score),
            ..*self
        }
    }

    /// Check the request describes a plan worth generating.
    ///
    /// The engine accepts anything; this is for callers that want to
    /// refuse bad input instead of rendering a degenerate plan.
    pub fn validate(&self) -> Result<()> {
        check_score("current", self.current_score)?;
        check_score("target", self.target_score)?;
        if self.months == 0 {
            return Err(RoadmapError::ZeroMonths);
        }
        if self.gain() <= 0.0 {
            return Err(RoadmapError::NoGain {
                current: self.current_score,
                target: self.target_score,
            });
        }
        Ok(())
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

fn check_score(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(RoadmapError::ScoreOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        assert_eq!(RoadmapRequest::new(20.0, 70.0, Purpose::Travel, 6).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = RoadmapRequest::new(-1.0, 70.0, Purpose::Travel, 6).validate().unwrap_err();
        assert_eq!(err, RoadmapError::ScoreOutOfRange { field: "current", value: -1.0 });

        let err = RoadmapRequest::new(10.0, 101.0, Purpose::Travel, 6).validate().unwrap_err();
        assert!(matches!(err, RoadmapError::ScoreOutOfRange { field: "target", .. }));

        assert!(RoadmapRequest::new(f64::NAN, 50.0, Purpose::Other, 3).validate().is_err());
    }

    #[test]
    fn test_rejects_zero_months_and_no_gain() {
        assert_eq!(
            RoadmapRequest::new(20.0, 70.0, Purpose::Work, 0).validate(),
            Err(RoadmapError::ZeroMonths)
        );
        assert!(matches!(
            RoadmapRequest::new(50.0, 50.0, Purpose::Work, 3).validate(),
            Err(RoadmapError::NoGain { .. })
        ));
    }

    #[test]
    fn test_clamped() {
        let request = RoadmapRequest::new(-20.0, 140.0, Purpose::Live, 4).clamped();
        assert_eq!(request.current_score, 0.0);
        assert_eq!(request.target_score, 100.0);
        assert_eq!(request.months, 4);
        assert_eq!(RoadmapRequest::new(f64::NAN, 10.0, Purpose::Live, 1).clamped().current_score, 0.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RoadmapError::NoGain { current: 50.0, target: 40.0 }.to_string(),
            "target score 40 must be higher than current score 50"
        );
    }
}
