//! Calendar-day solving streak.
//!
//! The streak is a forward-only automaton over the stored
//! (`current_streak`, `max_streak`, `last_solved_date`) triple. It only
//! ever looks at the current last-solved date; history is never replayed.

use preptrack_core::{DsaProgress, Time};

/// Advance the streak for a solve happening at `now`.
///
/// Calendar-day granularity, not elapsed time: a second solve on the same
/// day leaves the streak alone, a solve on the day after the last one
/// extends it, and anything else (first solve ever, a gap of two or more
/// days, or a last-solved date in the future from clock skew) resets it
/// to 1. `max_streak` never decreases.
pub fn advance(dsa: &mut DsaProgress, now: Time) {
    let today = now.date_naive();

    match dsa.last_solved_date.map(|d| d.date_naive()) {
        Some(last) if last == today => {
            // Already credited today.
        }
        Some(last) if last.succ_opt() == Some(today) => {
            dsa.current_streak += 1;
        }
        _ => {
            dsa.current_streak = 1;
        }
    }

    dsa.max_streak = dsa.max_streak.max(dsa.current_streak);
    dsa.last_solved_date = Some(now);
}
