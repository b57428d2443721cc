//! Event payloads accepted by the aggregator.
//!
//! Every operation takes an explicit struct with its required and optional
//! fields enumerated; anything that does not fit is rejected up front with a
//! validation error rather than coerced.

use preptrack_core::{Difficulty, GoalCategory, Time};
use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// A "problem solved" event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveEvent {
    /// Catalog id of the solved problem
    pub problem_id: String,

    /// Problem difficulty
    pub difficulty: Difficulty,

    /// Minutes spent; defaults to 30 when absent
    pub time_spent_minutes: Option<u32>,

    /// Attempts before solving; defaults to 1 when absent
    pub attempts: Option<u32>,
}

impl SolveEvent {
    /// Reject malformed events before any state is touched.
    pub fn validate(&self) -> Result<(), ProgressError> {
        if self.problem_id.is_empty() {
            return Err(ProgressError::Validation("problem_id is required".into()));
        }
        if self.attempts == Some(0) {
            return Err(ProgressError::Validation(
                "attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// A topic completion within a roadmap update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCompletion {
    /// Topic id within the roadmap
    pub topic_id: String,

    /// Human-readable topic title
    pub topic_title: String,
}

/// A roadmap progress update: topic completion, percentage override, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapUpdate {
    /// Catalog id of the roadmap
    pub roadmap_id: String,

    /// Human-readable roadmap title, used when creating the entry
    pub roadmap_title: String,

    /// Topic to mark complete, if any
    pub topic: Option<TopicCompletion>,

    /// Caller-computed completion percentage override, 0-100
    pub progress_percentage: Option<f64>,
}

impl RoadmapUpdate {
    /// Reject malformed updates before any state is touched.
    pub fn validate(&self) -> Result<(), ProgressError> {
        if self.roadmap_id.is_empty() {
            return Err(ProgressError::Validation("roadmap_id is required".into()));
        }
        if let Some(pct) = self.progress_percentage {
            if !(0.0..=100.0).contains(&pct) {
                return Err(ProgressError::Validation(format!(
                    "progress_percentage must be within 0-100, got {pct}"
                )));
            }
        }
        Ok(())
    }
}

/// Payload for creating a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    /// Goal title (required)
    pub title: String,

    /// Detailed description
    pub description: String,

    /// When the goal should be reached
    pub target_date: Time,

    /// Goal category
    pub category: GoalCategory,

    /// Target value, e.g. problem count
    pub target_value: f64,
}

impl NewGoal {
    /// Reject malformed goals before any state is touched.
    pub fn validate(&self) -> Result<(), ProgressError> {
        if self.title.trim().is_empty() {
            return Err(ProgressError::Validation("goal title is required".into()));
        }
        Ok(())
    }
}

/// Partial update for an existing goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPatch {
    /// New current value, if changing
    pub current_value: Option<f64>,

    /// New completion flag, if changing
    pub is_completed: Option<bool>,
}
