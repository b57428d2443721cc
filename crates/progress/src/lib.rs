//! Progress aggregation for PrepTrack.
//!
//! Streak tracking, weighted overall completion, badge-unlock evaluation,
//! and weekly reporting over one `ProgressRecord` per user, behind a
//! load-apply-save aggregator service.

#![warn(missing_docs)]

pub mod aggregator;
pub mod achievements;
pub mod error;
pub mod input;
pub mod report;
pub mod streak;
pub mod transitions;

pub use aggregator::{Dashboard, ProgressAggregator};
pub use error::{ProgressError, Result};
pub use input::{GoalPatch, NewGoal, RoadmapUpdate, SolveEvent, TopicCompletion};
pub use report::{overall_progress, weekly_report, weekly_study_minutes};
