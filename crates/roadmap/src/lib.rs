//! Roadmap projection engine.
//!
//! Pure functions that turn a current score, a target score, a purpose and
//! a plan length into study hours, pace, lesson balance, monthly milestones
//! and chart points. Nothing here performs I/O or keeps state.

#![warn(missing_docs)]

pub mod hours;
pub mod distribution;
pub mod milestones;
pub mod trajectory;
pub mod engine;
pub mod request;
pub mod estimate;
pub mod summary;

pub use hours::{compute_total_hours, derive_pace};
pub use distribution::{
    distribution_reason, select_lesson_type_distribution, select_lesson_type_distribution_for_key,
};
pub use milestones::{content_index, generate_milestones, per_month_delta, projected_score};
pub use trajectory::build_trajectory_points;
pub use engine::{project, EngineConfig, RoadmapEngine};
pub use request::{RoadmapError, RoadmapRequest, Result};
pub use estimate::{estimate_months, MONTHS_PER_LEVEL};
pub use summary::{share_caption, PlanSummary};
