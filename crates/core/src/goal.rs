//! Learning goals with numeric targets.

use serde::{Deserialize, Serialize};

use crate::id::GoalId;
use crate::Time;

/// What area of preparation a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalCategory {
    /// Problem-solving practice
    Dsa,
    /// Roadmap study
    Roadmap,
    /// Career-path milestones
    Career,
    /// Anything else the user wants to track
    Custom,
}

/// A user-defined goal, e.g. "solve 100 problems by June".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// When the goal should be reached
    pub target_date: Time,

    /// Goal category
    pub category: GoalCategory,

    /// Target value, e.g. problem count or study hours
    pub target_value: f64,

    /// Current value toward the target
    pub current_value: f64,

    /// Whether the goal is done
    pub is_completed: bool,

    /// When created
    pub created_at: Time,

    /// When completed, if it is
    pub completed_at: Option<Time>,
}
