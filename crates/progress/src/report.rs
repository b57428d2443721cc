//! Read-side projections: overall progress and weekly summaries.
//!
//! Pure functions over the record, recomputed on read. The weekly study sum
//! backs both the report and the cached `weekly_study_time_minutes` field,
//! so the two can never drift apart.

use chrono::Duration;
use preptrack_core::{ProgressRecord, Time, WeeklyReport};

/// Assumed total catalog size used to normalize the DSA component.
pub const DSA_CATALOG_SIZE: f64 = 150.0;

const DSA_WEIGHT: f64 = 0.4;
const ROADMAP_WEIGHT: f64 = 0.4;
const CAREER_WEIGHT: f64 = 0.2;

/// Weighted overall completion percentage in 0-100.
pub fn overall_progress(record: &ProgressRecord) -> u32 {
    let dsa = ((record.dsa_progress.total_solved as f64 / DSA_CATALOG_SIZE) * 100.0).min(100.0);

    let roadmap = mean(record.roadmap_progress.iter().map(|r| r.progress_percentage));
    let career = mean(
        record
            .career_path_progress
            .iter()
            .map(|c| c.progress_percentage),
    );

    (dsa * DSA_WEIGHT + roadmap * ROADMAP_WEIGHT + career * CAREER_WEIGHT).round() as u32
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Study minutes over the trailing seven days.
pub fn weekly_study_minutes(record: &ProgressRecord, now: Time) -> u32 {
    let week_ago = now - Duration::days(7);
    record
        .study_stats
        .study_sessions
        .iter()
        .filter(|s| s.date >= week_ago)
        .map(|s| s.duration_minutes)
        .sum()
}

/// Summarize the trailing seven days of activity.
pub fn weekly_report(record: &ProgressRecord, now: Time) -> WeeklyReport {
    let week_ago = now - Duration::days(7);
    let minutes = weekly_study_minutes(record, now);

    WeeklyReport {
        problems_solved: record
            .dsa_progress
            .completed_problems
            .iter()
            .filter(|p| p.completed_at >= week_ago)
            .count(),
        study_hours: (minutes as f64 / 60.0 * 10.0).round() / 10.0,
        topics_completed: record
            .roadmap_progress
            .iter()
            .map(|r| {
                r.completed_topics
                    .iter()
                    .filter(|t| t.completed_at >= week_ago)
                    .count()
            })
            .sum(),
        goals_achieved: record
            .goals
            .iter()
            .filter(|g| g.is_completed && g.completed_at.is_some_and(|at| at >= week_ago))
            .count(),
        current_streak: record.dsa_progress.current_streak,
        study_sessions: record
            .study_stats
            .study_sessions
            .iter()
            .filter(|s| s.date >= week_ago)
            .cloned()
            .collect(),
    }
}
