//! Sensei core data models.
//!
//! Proficiency bands, purposes, lesson types and the roadmap projection
//! shapes shared by the engine, the content tables and the profile store.

#![warn(missing_docs)]

// Identities
mod id;
mod error;

// Proficiency scale
mod level;
mod purpose;
mod lesson;
mod locale;

// Engine output
mod roadmap;

// Profiles
mod student;

// Re-exports
pub use id::StudentId;
pub use error::CoreError;

pub use level::{band_for_score, band_index, LevelTier, ProficiencyBand, BANDS};
pub use purpose::Purpose;
pub use lesson::{LessonType, LessonTypeDistribution};
pub use locale::Locale;

pub use roadmap::{Milestone, Pace, RoadmapProjection, TrajectoryPoint};

pub use student::Student;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
