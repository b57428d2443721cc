//! The per-user progress record.

use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;
use crate::career::CareerPathProgress;
use crate::dsa::DsaProgress;
use crate::goal::Goal;
use crate::id::{GoalId, UserId};
use crate::roadmap::RoadmapProgress;
use crate::study::StudyStats;

/// Everything tracked for one user. Owned exclusively by that user and
/// mutated as a whole: load, apply one transition, save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Owning user
    pub user_id: UserId,

    /// Problem-solving progress
    pub dsa_progress: DsaProgress,

    /// Per-roadmap progress entries
    pub roadmap_progress: Vec<RoadmapProgress>,

    /// User-defined goals
    pub goals: Vec<Goal>,

    /// Per-career-path progress entries
    pub career_path_progress: Vec<CareerPathProgress>,

    /// Study-time statistics
    pub study_stats: StudyStats,

    /// Earned badges, append-only
    pub achievements: Vec<Achievement>,
}

impl ProgressRecord {
    /// The empty record created lazily on a user's first
    /// progress-affecting request.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            dsa_progress: DsaProgress::default(),
            roadmap_progress: Vec::new(),
            goals: Vec::new(),
            career_path_progress: Vec::new(),
            study_stats: StudyStats::default(),
            achievements: Vec::new(),
        }
    }

    /// Look up a goal by id.
    pub fn goal_mut(&mut self, goal_id: GoalId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == goal_id)
    }

    /// Whether a badge has already been earned.
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.achievements.iter().any(|a| a.badge_id == badge_id)
    }
}
