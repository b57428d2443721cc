//! Unlockable achievement badges.

use serde::{Deserialize, Serialize};

use crate::Time;

/// Which family of rules an achievement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementCategory {
    /// Problem-count badges
    #[serde(rename = "DSA")]
    Dsa,
    /// Consecutive-day badges
    Streak,
    /// Study-time badges
    Study,
}

/// A badge the user has earned. Granted at most once per `badge_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable badge identifier, unique across the user's list
    pub badge_id: String,

    /// Display title
    pub title: String,

    /// What the badge was earned for
    pub description: String,

    /// When the badge was unlocked
    pub earned_at: Time,

    /// Rule family
    pub category: AchievementCategory,
}
