//! Roadmap projection model - the engine's output.

use serde::{Deserialize, Serialize};
use crate::lesson::LessonTypeDistribution;
use crate::purpose::Purpose;

/// Projected state and recommended content for one month of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Month number, starting at 1
    pub month: u32,

    /// Projected score at the end of the month, rounded
    pub projected_score: i32,

    /// Band name at the projected score
    pub band_name: String,

    /// Band chart color
    pub band_color: String,

    /// Topics to concentrate on
    pub focus_topics: Vec<String>,

    /// Abilities gained by the end of the month
    pub skills_gained: Vec<String>,

    /// Why this month looks the way it does
    pub rationale: String,

    /// Suggested textbooks
    pub recommended_textbooks: Vec<String>,

    /// Prompt the learner can paste into an AI tutor
    pub ai_prompt: String,

    /// Purpose-specific narrative ("you can now ...")
    pub purpose_milestone: String,

    /// Lessons to book this month
    pub lessons_needed: i32,
}

/// One sample of the progress chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Axis label ("now", "1 mo", ...)
    pub label: String,

    /// Projected score, one decimal
    pub score: f64,
}

/// Study pace needed to hit the hour budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    /// Hours per week, one decimal
    pub hours_per_week: f64,

    /// Hours per day, one decimal
    pub hours_per_day: f64,
}

/// Everything a presentation layer needs to render a study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapProjection {
    /// Purpose the plan was built for
    pub purpose: Purpose,

    /// Total study hours between the two scores
    pub total_estimated_hours: u32,

    /// Hours per week, one decimal
    pub hours_per_week: f64,

    /// Hours per day, one decimal
    pub hours_per_day: f64,

    /// Lesson-type split at the starting level
    pub lesson_type_distribution: LessonTypeDistribution,

    /// Explanation of the split
    pub distribution_reason: String,

    /// Wording for the starting level
    pub level_description: String,

    /// One milestone per month, in month order
    pub milestones: Vec<Milestone>,

    /// `months + 1` chart points, starting with "now"
    pub trajectory_points: Vec<TrajectoryPoint>,
}

impl RoadmapProjection {
    /// Pace as a standalone value.
    pub fn pace(&self) -> Pace {
        Pace {
            hours_per_week: self.hours_per_week,
            hours_per_day: self.hours_per_day,
        }
    }

    /// Last milestone, if the plan has any months.
    pub fn final_milestone(&self) -> Option<&Milestone> {
        self.milestones.last()
    }
}
