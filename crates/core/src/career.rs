//! Career-path progress. Structurally a thinner sibling of roadmap progress.

use serde::{Deserialize, Serialize};

use crate::Time;

/// A milestone inside a career path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone id (unique within the path entry)
    pub milestone_id: String,

    /// Human-readable title
    pub title: String,

    /// Whether the milestone is done
    pub is_completed: bool,

    /// When completed, if it is
    pub completed_at: Option<Time>,
}

/// Per-career-path progress entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathProgress {
    /// Catalog id of the career path
    pub path_id: String,

    /// Human-readable path title
    pub path_title: String,

    /// When the user started this path
    pub started_at: Time,

    /// Milestones, completed or not
    pub milestones: Vec<Milestone>,

    /// Completion percentage, 0-100
    pub progress_percentage: f64,
}
