//! Study-time statistics and sessions.

use serde::{Deserialize, Serialize};

use crate::Time;

/// What kind of work a study session was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Activity {
    /// Problem solving
    Dsa,
    /// Roadmap topic study
    Roadmap,
}

/// One logged study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// When the session happened
    pub date: Time,

    /// Session length in minutes
    pub duration_minutes: u32,

    /// Kind of work
    pub activity: Activity,

    /// Specific problem or topic worked on
    pub focus: String,
}

/// Aggregated study statistics for one user.
///
/// `weekly_study_time_minutes` is a cache over the trailing 7 days of
/// `study_sessions`, refreshed on every dashboard fetch rather than
/// maintained incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyStats {
    /// Lifetime study time in minutes
    pub total_study_time_minutes: u32,

    /// Cached trailing-7-day study time in minutes
    pub weekly_study_time_minutes: u32,

    /// All logged sessions, append-only
    pub study_sessions: Vec<StudySession>,
}

impl StudyStats {
    /// Log a session and add its duration to the lifetime total.
    pub fn log_session(&mut self, session: StudySession) {
        self.total_study_time_minutes += session.duration_minutes;
        self.study_sessions.push(session);
    }
}
