//! Read-side report shapes.

use serde::{Deserialize, Serialize};

use crate::study::StudySession;

/// Summary of the trailing seven days of activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Problems solved this week
    pub problems_solved: usize,

    /// Study time this week, in hours rounded to one decimal
    pub study_hours: f64,

    /// Roadmap topics completed this week, summed across roadmaps
    pub topics_completed: usize,

    /// Goals marked complete this week
    pub goals_achieved: usize,

    /// Current solving streak in days
    pub current_streak: u32,

    /// This week's study sessions
    pub study_sessions: Vec<StudySession>,
}
