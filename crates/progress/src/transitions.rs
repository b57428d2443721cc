//! Pure record transitions.
//!
//! Each function takes the record and an explicit `now` and applies exactly
//! one state change. The aggregator wraps these in a load-apply-save cycle;
//! keeping them pure makes streak and report scenarios testable with fixed
//! clocks.

use preptrack_core::{
    Activity, CompletedProblem, Goal, GoalId, ProgressRecord, RoadmapProgress, StudySession, Time,
};

use crate::error::ProgressError;
use crate::input::{GoalPatch, NewGoal, RoadmapUpdate, SolveEvent};
use crate::streak;

/// Minutes credited for a solve when the event does not say.
pub const DEFAULT_SOLVE_MINUTES: u32 = 30;

/// Fixed study-session length credited for completing a roadmap topic.
pub const TOPIC_SESSION_MINUTES: u32 = 45;

/// Record a solved problem. Returns `false` if `problem_id` was already
/// credited, in which case the record is untouched.
pub fn apply_problem_solved(record: &mut ProgressRecord, event: &SolveEvent, now: Time) -> bool {
    let time_spent_minutes = event.time_spent_minutes.unwrap_or(DEFAULT_SOLVE_MINUTES);

    let applied = record.dsa_progress.push_completion(CompletedProblem {
        problem_id: event.problem_id.clone(),
        difficulty: event.difficulty,
        completed_at: now,
        time_spent_minutes,
        attempts: event.attempts.unwrap_or(1),
    });
    if !applied {
        return false;
    }

    streak::advance(&mut record.dsa_progress, now);

    record.study_stats.log_session(StudySession {
        date: now,
        duration_minutes: time_spent_minutes,
        activity: Activity::Dsa,
        focus: event.problem_id.clone(),
    });

    true
}

/// Apply a roadmap update, creating the entry on first touch. Returns the
/// index of the affected entry.
pub fn apply_roadmap_update(
    record: &mut ProgressRecord,
    update: &RoadmapUpdate,
    now: Time,
) -> usize {
    let index = match record
        .roadmap_progress
        .iter()
        .position(|r| r.roadmap_id == update.roadmap_id)
    {
        Some(index) => index,
        None => {
            record.roadmap_progress.push(RoadmapProgress::started(
                update.roadmap_id.clone(),
                update.roadmap_title.clone(),
                now,
            ));
            record.roadmap_progress.len() - 1
        }
    };

    if let Some(topic) = &update.topic {
        let entry = &mut record.roadmap_progress[index];
        if !entry.has_topic(&topic.topic_id) {
            let focus = format!("{} - {}", entry.roadmap_title, topic.topic_title);
            entry
                .completed_topics
                .push(preptrack_core::CompletedTopic {
                    topic_id: topic.topic_id.clone(),
                    topic_title: topic.topic_title.clone(),
                    completed_at: now,
                });
            record.study_stats.log_session(StudySession {
                date: now,
                duration_minutes: TOPIC_SESSION_MINUTES,
                activity: Activity::Roadmap,
                focus,
            });
        }
    }

    // Caller-computed override; never derived from the topic count.
    if let Some(pct) = update.progress_percentage {
        record.roadmap_progress[index].progress_percentage = pct;
    }

    index
}

/// Append a new goal and return it.
pub fn add_goal(record: &mut ProgressRecord, input: NewGoal, now: Time) -> Goal {
    let goal = Goal {
        id: GoalId::new(),
        title: input.title,
        description: input.description,
        target_date: input.target_date,
        category: input.category,
        target_value: input.target_value,
        current_value: 0.0,
        is_completed: false,
        created_at: now,
        completed_at: None,
    };
    record.goals.push(goal.clone());
    goal
}

/// Patch an existing goal in place. Marking a goal completed stamps
/// `completed_at`; un-marking it leaves the old stamp alone.
pub fn update_goal<'a>(
    record: &'a mut ProgressRecord,
    goal_id: GoalId,
    patch: &GoalPatch,
    now: Time,
) -> Result<&'a Goal, ProgressError> {
    let goal = record
        .goal_mut(goal_id)
        .ok_or_else(|| ProgressError::NotFound(format!("goal {goal_id}")))?;

    if let Some(value) = patch.current_value {
        goal.current_value = value;
    }
    if let Some(done) = patch.is_completed {
        goal.is_completed = done;
        if done {
            goal.completed_at = Some(now);
        }
    }

    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use preptrack_core::{Difficulty, GoalCategory, UserId};

    fn now() -> Time {
        Utc.with_ymd_and_hms(2026, 5, 20, 12, 0, 0).unwrap()
    }

    fn solve(id: &str, difficulty: Difficulty) -> SolveEvent {
        SolveEvent {
            problem_id: id.into(),
            difficulty,
            time_spent_minutes: None,
            attempts: None,
        }
    }

    #[test]
    fn solve_applies_defaults_and_logs_a_session() {
        let mut record = ProgressRecord::new(UserId::new());
        assert!(apply_problem_solved(&mut record, &solve("two-sum", Difficulty::Easy), now()));

        let completion = &record.dsa_progress.completed_problems[0];
        assert_eq!(completion.time_spent_minutes, DEFAULT_SOLVE_MINUTES);
        assert_eq!(completion.attempts, 1);

        assert_eq!(record.study_stats.total_study_time_minutes, 30);
        let session = &record.study_stats.study_sessions[0];
        assert_eq!(session.activity, Activity::Dsa);
        assert_eq!(session.focus, "two-sum");
    }

    #[test]
    fn distinct_solves_keep_counters_consistent() {
        let mut record = ProgressRecord::new(UserId::new());
        let problems = [
            ("two-sum", Difficulty::Easy),
            ("three-sum", Difficulty::Medium),
            ("n-queens", Difficulty::Hard),
            ("valid-anagram", Difficulty::Easy),
        ];
        for (id, difficulty) in problems {
            assert!(apply_problem_solved(&mut record, &solve(id, difficulty), now()));
        }

        assert_eq!(record.dsa_progress.total_solved, 4);
        assert_eq!(
            record.dsa_progress.easy_count
                + record.dsa_progress.medium_count
                + record.dsa_progress.hard_count,
            4
        );
        assert!(record.dsa_progress.invariants_hold());
    }

    #[test]
    fn duplicate_solve_leaves_the_record_bit_identical() {
        let mut record = ProgressRecord::new(UserId::new());
        apply_problem_solved(&mut record, &solve("two-sum", Difficulty::Easy), now());

        let before = serde_json::to_value(&record).unwrap();

        // Same id with different difficulty and timing must change nothing.
        let retry = SolveEvent {
            problem_id: "two-sum".into(),
            difficulty: Difficulty::Hard,
            time_spent_minutes: Some(90),
            attempts: Some(4),
        };
        assert!(!apply_problem_solved(&mut record, &retry, now()));

        let after = serde_json::to_value(&record).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn roadmap_update_creates_entry_and_credits_topic_session() {
        let mut record = ProgressRecord::new(UserId::new());
        let update = RoadmapUpdate {
            roadmap_id: "frontend".into(),
            roadmap_title: "Frontend Developer".into(),
            topic: Some(crate::input::TopicCompletion {
                topic_id: "html-basics".into(),
                topic_title: "HTML Basics".into(),
            }),
            progress_percentage: Some(10.0),
        };

        let index = apply_roadmap_update(&mut record, &update, now());
        let entry = &record.roadmap_progress[index];
        assert_eq!(entry.completed_topics.len(), 1);
        assert!(entry.is_active);
        assert_eq!(entry.progress_percentage, 10.0);

        assert_eq!(record.study_stats.total_study_time_minutes, 45);
        assert_eq!(
            record.study_stats.study_sessions[0].focus,
            "Frontend Developer - HTML Basics"
        );
    }

    #[test]
    fn repeated_topic_is_not_credited_twice() {
        let mut record = ProgressRecord::new(UserId::new());
        let update = RoadmapUpdate {
            roadmap_id: "frontend".into(),
            roadmap_title: "Frontend Developer".into(),
            topic: Some(crate::input::TopicCompletion {
                topic_id: "html-basics".into(),
                topic_title: "HTML Basics".into(),
            }),
            progress_percentage: None,
        };

        apply_roadmap_update(&mut record, &update, now());
        apply_roadmap_update(&mut record, &update, now());

        assert_eq!(record.roadmap_progress[0].completed_topics.len(), 1);
        assert_eq!(record.study_stats.total_study_time_minutes, 45);
    }

    #[test]
    fn percentage_override_is_taken_verbatim() {
        let mut record = ProgressRecord::new(UserId::new());
        let update = RoadmapUpdate {
            roadmap_id: "frontend".into(),
            roadmap_title: "Frontend Developer".into(),
            topic: None,
            progress_percentage: Some(72.5),
        };
        let index = apply_roadmap_update(&mut record, &update, now());
        assert_eq!(record.roadmap_progress[index].progress_percentage, 72.5);
        // No topic means no study session either.
        assert!(record.study_stats.study_sessions.is_empty());
    }

    #[test]
    fn goal_lifecycle() {
        let mut record = ProgressRecord::new(UserId::new());
        let id = add_goal(
            &mut record,
            NewGoal {
                title: "Solve 100 problems".into(),
                description: "Grind".into(),
                target_date: now(),
                category: GoalCategory::Dsa,
                target_value: 100.0,
            },
            now(),
        )
        .id;

        let goal = update_goal(
            &mut record,
            id,
            &GoalPatch {
                current_value: Some(40.0),
                is_completed: None,
            },
            now(),
        )
        .unwrap();
        assert_eq!(goal.current_value, 40.0);
        assert!(!goal.is_completed);

        let goal = update_goal(
            &mut record,
            id,
            &GoalPatch {
                current_value: None,
                is_completed: Some(true),
            },
            now(),
        )
        .unwrap();
        assert!(goal.is_completed);
        assert_eq!(goal.completed_at, Some(now()));
    }

    #[test]
    fn updating_an_unknown_goal_is_not_found() {
        let mut record = ProgressRecord::new(UserId::new());
        let result = update_goal(&mut record, GoalId::new(), &GoalPatch::default(), now());
        assert!(matches!(result, Err(ProgressError::NotFound(_))));
    }
}
