//! Roadmap engine - composes hours, pace, balance and milestones.

use sensei_content::TextBundle;
use sensei_core::{LevelTier, Locale, RoadmapProjection};
use tracing::debug;

use crate::distribution::{distribution_reason, select_lesson_type_distribution};
use crate::hours::{compute_total_hours, derive_pace};
use crate::milestones::generate_milestones;
use crate::request::RoadmapRequest;
use crate::trajectory::build_trajectory_points;

/// Configuration for the roadmap engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Language of generated text
    pub locale: Locale,
}

/// Builds roadmap projections in one locale.
///
/// Holds no state between calls; the same request always yields the same
/// projection.
#[derive(Debug, Clone, Default)]
pub struct RoadmapEngine {
    config: EngineConfig,
}

impl RoadmapEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Text bundle for the configured locale.
    pub fn bundle(&self) -> &'static TextBundle {
        sensei_content::bundle(self.config.locale)
    }

    /// Project a roadmap for the request.
    pub fn project(&self, request: &RoadmapRequest) -> RoadmapProjection {
        project(request, self.bundle())
    }
}

/// Project a roadmap using an explicit text bundle.
///
/// `request.months` must be at least 1 for the pace to be finite.
pub fn project(request: &RoadmapRequest, bundle: &TextBundle) -> RoadmapProjection {
    let RoadmapRequest { current_score, target_score, purpose, months } = *request;

    let total_estimated_hours = compute_total_hours(current_score, target_score);
    let pace = derive_pace(total_estimated_hours, months);

    debug!(
        purpose = %purpose,
        months,
        current_score,
        target_score,
        total_estimated_hours,
        "Projected roadmap"
    );

    RoadmapProjection {
        purpose,
        total_estimated_hours,
        hours_per_week: pace.hours_per_week,
        hours_per_day: pace.hours_per_day,
        lesson_type_distribution: select_lesson_type_distribution(current_score, purpose),
        distribution_reason: distribution_reason(purpose, current_score, bundle).to_string(),
        level_description: bundle.level_description(LevelTier::for_score(current_score)).to_string(),
        milestones: generate_milestones(current_score, target_score, months, purpose, bundle),
        trajectory_points: build_trajectory_points(current_score, target_score, months, bundle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensei_core::{LessonTypeDistribution, Purpose};

    use crate::hours::round_tenth;
    use crate::milestones::{projected_score, round_half_up};

    fn travel_request() -> RoadmapRequest {
        RoadmapRequest::new(20.0, 70.0, Purpose::Travel, 6)
    }

    #[test]
    fn test_travel_projection() {
        let engine = RoadmapEngine::new().with_config(EngineConfig { locale: Locale::En });
        let projection = engine.project(&travel_request());

        assert_eq!(projection.purpose, Purpose::Travel);
        assert_eq!(projection.total_estimated_hours, 1050);
        assert_eq!(projection.hours_per_week, 43.8);
        assert_eq!(projection.hours_per_day, 5.8);
        assert_eq!(projection.lesson_type_distribution, LessonTypeDistribution::new(15, 25, 35, 10, 15));
        assert_eq!(projection.milestones.len(), 6);
        assert_eq!(projection.milestones[0].projected_score, 28);
        assert_eq!(projection.final_milestone().map(|m| m.projected_score), Some(70));
        assert_eq!(projection.trajectory_points.len(), 7);
        assert_eq!(projection.level_description, engine.bundle().level_descriptions[1]);
        assert_eq!(
            projection.distribution_reason,
            engine.bundle().purpose(Purpose::Travel).reason_beginner
        );
    }

    #[test]
    fn test_milestones_agree_with_trajectory() {
        let engine = RoadmapEngine::new();
        for request in [
            RoadmapRequest::new(13.0, 91.0, Purpose::Work, 9),
            RoadmapRequest::new(0.0, 24.94, Purpose::Other, 2),
        ] {
            let projection = engine.project(&request);
            for milestone in &projection.milestones {
                let raw = projected_score(request.current_score, request.target_score, request.months, milestone.month);
                let point = &projection.trajectory_points[milestone.month as usize];
                assert_eq!(milestone.projected_score, round_half_up(raw) as i32);
                assert_eq!(point.score, round_tenth(raw));
            }
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let engine = RoadmapEngine::new();
        let first = engine.project(&travel_request());
        let second = engine.project(&travel_request());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_default_locale_is_japanese() {
        let engine = RoadmapEngine::new();
        assert_eq!(engine.config().locale, Locale::Ja);
        let projection = engine.project(&travel_request());
        assert_eq!(projection.trajectory_points[0].label, "現在");
    }

    #[test]
    fn test_equal_scores_project_flat_plan() {
        let projection = RoadmapEngine::new().project(&RoadmapRequest::new(40.0, 40.0, Purpose::Other, 3));
        assert_eq!(projection.total_estimated_hours, 0);
        assert_eq!(projection.hours_per_week, 0.0);
        assert!(projection.milestones.iter().all(|m| m.projected_score == 40));
        assert!(projection.milestones.iter().all(|m| m.lessons_needed == 0));
    }
}
