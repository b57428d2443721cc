//! PrepTrack core data models.
//!
//! This crate defines the per-user progress record and its sub-structures:
//! DSA completions and streaks, roadmap and career-path entries, goals,
//! study statistics, and earned achievements.

#![warn(missing_docs)]

// Core identities
mod id;

// Progress record and sub-structures
mod record;
mod dsa;
mod roadmap;
mod goal;
mod career;
mod study;
mod achievement;

// Read-side shapes
mod report;

// Re-exports
pub use id::*;

pub use record::ProgressRecord;
pub use dsa::{CompletedProblem, Difficulty, DsaProgress, UnknownDifficulty};
pub use roadmap::{CompletedTopic, RoadmapProgress};
pub use goal::{Goal, GoalCategory};
pub use career::{CareerPathProgress, Milestone};
pub use study::{Activity, StudySession, StudyStats};
pub use achievement::{Achievement, AchievementCategory};
pub use report::WeeklyReport;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
