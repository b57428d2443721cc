//! Badge-unlock evaluation.
//!
//! A deterministic rule table checked after every progress-changing event.
//! Each rule is independent and idempotent: a badge already present in the
//! record is never granted again.
//!
//! The counter rules fire on exact-value crossing (`== 1`, `== 10`, `== 7`),
//! not on `>=`. A record whose counter jumps past the value without ever
//! equalling it never unlocks the badge; `study_10h` alone uses `>=`.

use preptrack_core::{Achievement, AchievementCategory, ProgressRecord, Time};
use tracing::info;

struct Rule {
    badge_id: &'static str,
    title: &'static str,
    description: &'static str,
    category: AchievementCategory,
    satisfied: fn(&ProgressRecord) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        badge_id: "first_problem",
        title: "First Steps",
        description: "Solved your first DSA problem!",
        category: AchievementCategory::Dsa,
        satisfied: |r| r.dsa_progress.total_solved == 1,
    },
    Rule {
        badge_id: "problem_solver",
        title: "Problem Solver",
        description: "Solved 10 DSA problems!",
        category: AchievementCategory::Dsa,
        satisfied: |r| r.dsa_progress.total_solved == 10,
    },
    Rule {
        badge_id: "week_streak",
        title: "Week Warrior",
        description: "7-day solving streak!",
        category: AchievementCategory::Streak,
        satisfied: |r| r.dsa_progress.current_streak == 7,
    },
    Rule {
        badge_id: "study_10h",
        title: "Dedicated Learner",
        description: "Completed 10 hours of study!",
        category: AchievementCategory::Study,
        satisfied: |r| r.study_stats.total_study_time_minutes >= 600,
    },
];

/// Evaluate the rule table once, appending every newly-satisfied badge in a
/// single batch stamped with the same `earned_at`. Returns the number of
/// badges granted.
pub fn evaluate(record: &mut ProgressRecord, now: Time) -> usize {
    let new: Vec<Achievement> = RULES
        .iter()
        .filter(|rule| (rule.satisfied)(record) && !record.has_badge(rule.badge_id))
        .map(|rule| Achievement {
            badge_id: rule.badge_id.to_string(),
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            earned_at: now,
            category: rule.category,
        })
        .collect();

    for badge in &new {
        info!(user = %record.user_id, badge = %badge.badge_id, "achievement unlocked");
    }

    let granted = new.len();
    record.achievements.extend(new);
    granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use preptrack_core::{Activity, Difficulty, StudySession, UserId};

    use crate::input::SolveEvent;
    use crate::transitions::apply_problem_solved;

    fn now() -> Time {
        Utc.with_ymd_and_hms(2026, 5, 20, 12, 0, 0).unwrap()
    }

    fn solve_n(record: &mut ProgressRecord, n: usize, evaluate_each: bool) {
        for i in 0..n {
            let event = SolveEvent {
                problem_id: format!("problem-{i}"),
                difficulty: Difficulty::Easy,
                time_spent_minutes: Some(5),
                attempts: None,
            };
            assert!(apply_problem_solved(record, &event, now()));
            if evaluate_each {
                evaluate(record, now());
            }
        }
    }

    #[test]
    fn first_problem_is_granted_exactly_once() {
        let mut record = ProgressRecord::new(UserId::new());
        solve_n(&mut record, 9, true);

        let first_problem: Vec<_> = record
            .achievements
            .iter()
            .filter(|a| a.badge_id == "first_problem")
            .collect();
        assert_eq!(first_problem.len(), 1);

        // No duplicate badge ids at all.
        let mut ids: Vec<_> = record.achievements.iter().map(|a| &a.badge_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), record.achievements.len());
    }

    #[test]
    fn tenth_problem_grants_problem_solver() {
        let mut record = ProgressRecord::new(UserId::new());
        solve_n(&mut record, 10, true);
        assert!(record.has_badge("problem_solver"));
    }

    #[test]
    fn skipping_the_exact_count_never_grants_the_badge() {
        // The rule is == 10, not >= 10. A batch that only evaluates after
        // the counter has moved past 10 misses the badge for good.
        let mut record = ProgressRecord::new(UserId::new());
        solve_n(&mut record, 12, false);
        evaluate(&mut record, now());

        assert_eq!(record.dsa_progress.total_solved, 12);
        assert!(!record.has_badge("problem_solver"));
    }

    #[test]
    fn single_long_session_grants_study_10h() {
        let mut record = ProgressRecord::new(UserId::new());
        record.study_stats.log_session(StudySession {
            date: now(),
            duration_minutes: 600,
            activity: Activity::Roadmap,
            focus: "Frontend Developer - Marathon".into(),
        });

        let granted = evaluate(&mut record, now());
        assert_eq!(granted, 1);
        assert!(record.has_badge("study_10h"));
    }

    #[test]
    fn week_streak_fires_at_exactly_seven() {
        let mut record = ProgressRecord::new(UserId::new());
        record.dsa_progress.current_streak = 7;
        record.dsa_progress.max_streak = 7;

        evaluate(&mut record, now());
        assert!(record.has_badge("week_streak"));

        // An eight-day streak without passing through evaluation at 7
        // would not fire; at 8 the condition is already false.
        let mut late = ProgressRecord::new(UserId::new());
        late.dsa_progress.current_streak = 8;
        late.dsa_progress.max_streak = 8;
        evaluate(&mut late, now());
        assert!(!late.has_badge("week_streak"));
    }

    #[test]
    fn batch_grants_share_one_earned_at() {
        let mut record = ProgressRecord::new(UserId::new());
        // One 600-minute solve satisfies first_problem and study_10h together.
        let event = SolveEvent {
            problem_id: "hard-one".into(),
            difficulty: Difficulty::Hard,
            time_spent_minutes: Some(600),
            attempts: Some(3),
        };
        apply_problem_solved(&mut record, &event, now());

        let granted = evaluate(&mut record, now());
        assert_eq!(granted, 2);
        assert!(record
            .achievements
            .windows(2)
            .all(|w| w[0].earned_at == w[1].earned_at));
    }
}
