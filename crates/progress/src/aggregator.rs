//! The storage-backed Progress Aggregator.
//!
//! Each public operation is one atomic read-modify-write against one user's
//! record: load, apply a single transition, save. Records are created lazily
//! on the first progress-affecting request. Achievement evaluation runs
//! after every progress-changing event.

use chrono::Utc;
use preptrack_core::{
    Achievement, CareerPathProgress, DsaProgress, Goal, GoalId, ProgressRecord, RoadmapProgress,
    StudyStats, UserId, WeeklyReport,
};
use preptrack_storage::ProgressStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::achievements;
use crate::error::{ProgressError, Result};
use crate::input::{GoalPatch, NewGoal, RoadmapUpdate, SolveEvent};
use crate::report;
use crate::transitions;

/// Everything the dashboard shows for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Weighted overall completion percentage
    pub overall_progress: u32,

    /// Problem-solving progress
    pub dsa_progress: DsaProgress,

    /// Per-roadmap entries
    pub roadmap_progress: Vec<RoadmapProgress>,

    /// User-defined goals
    pub goals: Vec<Goal>,

    /// Per-career-path entries
    pub career_path_progress: Vec<CareerPathProgress>,

    /// Study statistics, weekly cache freshly recomputed
    pub study_stats: StudyStats,

    /// Earned badges
    pub achievements: Vec<Achievement>,

    /// Trailing-7-day summary
    pub weekly_report: WeeklyReport,
}

/// Owns a single user's progress per invocation: loads the record, applies
/// one operation, and writes it back through the store.
pub struct ProgressAggregator<S: ProgressStore> {
    store: S,
}

impl<S: ProgressStore> ProgressAggregator<S> {
    /// Create an aggregator over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn load_or_create(&self, user_id: UserId) -> Result<ProgressRecord> {
        match self.store.load_record(user_id).await? {
            Some(record) => Ok(record),
            None => {
                debug!(user = %user_id, "creating initial progress record");
                Ok(ProgressRecord::new(user_id))
            }
        }
    }

    async fn load_existing(&self, user_id: UserId) -> Result<ProgressRecord> {
        self.store
            .load_record(user_id)
            .await?
            .ok_or_else(|| ProgressError::NotFound(format!("progress record for user {user_id}")))
    }

    /// Fetch the full dashboard, refreshing the cached weekly study time.
    pub async fn dashboard(&mut self, user_id: UserId) -> Result<Dashboard> {
        let mut record = self.load_or_create(user_id).await?;
        let now = Utc::now();

        record.study_stats.weekly_study_time_minutes = report::weekly_study_minutes(&record, now);
        self.store.save_record(&record).await?;

        Ok(Dashboard {
            overall_progress: report::overall_progress(&record),
            weekly_report: report::weekly_report(&record, now),
            dsa_progress: record.dsa_progress,
            roadmap_progress: record.roadmap_progress,
            goals: record.goals,
            career_path_progress: record.career_path_progress,
            study_stats: record.study_stats,
            achievements: record.achievements,
        })
    }

    /// Record a solved problem. Idempotent on `problem_id`: a duplicate
    /// leaves the stored record untouched and skips the save.
    pub async fn record_problem_solved(
        &mut self,
        user_id: UserId,
        event: SolveEvent,
    ) -> Result<DsaProgress> {
        event.validate()?;
        let mut record = self.load_or_create(user_id).await?;
        let now = Utc::now();

        if transitions::apply_problem_solved(&mut record, &event, now) {
            achievements::evaluate(&mut record, now);
            self.store.save_record(&record).await?;
        } else {
            debug!(user = %user_id, problem = %event.problem_id, "problem already completed");
        }

        Ok(record.dsa_progress)
    }

    /// Mark a roadmap topic complete and/or override the roadmap percentage.
    pub async fn update_roadmap_progress(
        &mut self,
        user_id: UserId,
        update: RoadmapUpdate,
    ) -> Result<RoadmapProgress> {
        update.validate()?;
        let mut record = self.load_or_create(user_id).await?;
        let now = Utc::now();

        let index = transitions::apply_roadmap_update(&mut record, &update, now);
        achievements::evaluate(&mut record, now);
        self.store.save_record(&record).await?;

        Ok(record.roadmap_progress[index].clone())
    }

    /// Create a new goal.
    pub async fn add_goal(&mut self, user_id: UserId, goal: NewGoal) -> Result<Goal> {
        goal.validate()?;
        let mut record = self.load_or_create(user_id).await?;
        let now = Utc::now();

        let goal = transitions::add_goal(&mut record, goal, now);
        self.store.save_record(&record).await?;

        Ok(goal)
    }

    /// Patch an existing goal. Fails with `NotFound` for an unknown user or
    /// goal id.
    pub async fn update_goal(
        &mut self,
        user_id: UserId,
        goal_id: GoalId,
        patch: GoalPatch,
    ) -> Result<Goal> {
        let mut record = self.load_existing(user_id).await?;
        let now = Utc::now();

        let goal = transitions::update_goal(&mut record, goal_id, &patch, now)?.clone();
        achievements::evaluate(&mut record, now);
        self.store.save_record(&record).await?;

        Ok(goal)
    }

    /// Summarize the trailing seven days. Pure read, nothing persisted.
    pub async fn weekly_report(&self, user_id: UserId) -> Result<WeeklyReport> {
        let record = self.load_existing(user_id).await?;
        Ok(report::weekly_report(&record, Utc::now()))
    }
}
