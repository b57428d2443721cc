//! DSA problem-solving progress: completions, counters, and streaks.

use serde::{Deserialize, Serialize};

use crate::Time;

/// Problem difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Warm-up tier
    Easy,
    /// Standard interview tier
    Medium,
    /// Hard tier
    Hard,
}

/// Error for a difficulty string outside the enum.
#[derive(Debug, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl std::str::FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        };
        f.write_str(s)
    }
}

/// A single recorded problem completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedProblem {
    /// Catalog id of the problem (unique within the list)
    pub problem_id: String,

    /// Difficulty at completion time
    pub difficulty: Difficulty,

    /// When the problem was solved
    pub completed_at: Time,

    /// Minutes spent on the problem
    pub time_spent_minutes: u32,

    /// Number of attempts before solving
    pub attempts: u32,
}

/// Aggregated DSA progress for one user.
///
/// The difficulty counters and `total_solved` are stored alongside the
/// completion list; `push_completion` is the only mutation path, so the
/// counters cannot drift from the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DsaProgress {
    /// Completions in insertion order
    pub completed_problems: Vec<CompletedProblem>,

    /// Total problems solved
    pub total_solved: u32,

    /// Easy problems solved
    pub easy_count: u32,

    /// Medium problems solved
    pub medium_count: u32,

    /// Hard problems solved
    pub hard_count: u32,

    /// Consecutive calendar days with at least one solve
    pub current_streak: u32,

    /// Best streak ever reached
    pub max_streak: u32,

    /// When the most recent problem was solved
    pub last_solved_date: Option<Time>,
}

impl DsaProgress {
    /// Whether `problem_id` has already been credited.
    pub fn is_completed(&self, problem_id: &str) -> bool {
        self.completed_problems
            .iter()
            .any(|p| p.problem_id == problem_id)
    }

    /// Append a completion and bump the matching counters.
    ///
    /// Returns `false` without mutating anything if the problem was already
    /// credited, so retries and double-submissions cannot double-count.
    pub fn push_completion(&mut self, completion: CompletedProblem) -> bool {
        if self.is_completed(&completion.problem_id) {
            return false;
        }

        match completion.difficulty {
            Difficulty::Easy => self.easy_count += 1,
            Difficulty::Medium => self.medium_count += 1,
            Difficulty::Hard => self.hard_count += 1,
        }
        self.total_solved += 1;
        self.completed_problems.push(completion);

        true
    }

    /// Check the counter/list consistency invariant.
    pub fn invariants_hold(&self) -> bool {
        self.total_solved as usize == self.completed_problems.len()
            && self.total_solved == self.easy_count + self.medium_count + self.hard_count
            && self.max_streak >= self.current_streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn completion(id: &str, difficulty: Difficulty) -> CompletedProblem {
        CompletedProblem {
            problem_id: id.to_string(),
            difficulty,
            completed_at: Utc::now(),
            time_spent_minutes: 30,
            attempts: 1,
        }
    }

    #[test]
    fn counters_track_the_list() {
        let mut dsa = DsaProgress::default();
        assert!(dsa.push_completion(completion("two-sum", Difficulty::Easy)));
        assert!(dsa.push_completion(completion("lru-cache", Difficulty::Medium)));
        assert!(dsa.push_completion(completion("median-streams", Difficulty::Hard)));

        assert_eq!(dsa.total_solved, 3);
        assert_eq!(dsa.easy_count, 1);
        assert_eq!(dsa.medium_count, 1);
        assert_eq!(dsa.hard_count, 1);
        assert!(dsa.invariants_hold());
    }

    #[test]
    fn duplicate_completion_is_rejected() {
        let mut dsa = DsaProgress::default();
        assert!(dsa.push_completion(completion("two-sum", Difficulty::Easy)));
        // Same id with a different difficulty must still be a no-op.
        assert!(!dsa.push_completion(completion("two-sum", Difficulty::Hard)));

        assert_eq!(dsa.total_solved, 1);
        assert_eq!(dsa.hard_count, 0);
        assert!(dsa.invariants_hold());
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("BRUTAL".parse::<Difficulty>().is_err());
    }
}
