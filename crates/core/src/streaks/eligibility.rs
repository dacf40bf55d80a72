//! Completion eligibility rules for the goal list.
//!
//! These checks gate whether the completion control is offered; the streak
//! engine itself does not enforce them.

use chrono::NaiveDate;

use crate::goals::{Frequency, Goal};
use crate::utils::time_utils::{completion_date_today, days_elapsed};

/// Minimum whole days between two completions of a weekly goal.
pub const WEEKLY_COOLDOWN_DAYS: i64 = 7;

/// Whether `goal` may be completed on `today`.
pub fn can_complete_on(goal: &Goal, today: NaiveDate) -> bool {
    match goal.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => match goal.last_completed_date {
            None => true,
            Some(last) => days_elapsed(last, today) >= WEEKLY_COOLDOWN_DAYS,
        },
    }
}

/// Whether `goal` may be completed today (UTC calendar date).
pub fn can_complete_today(goal: &Goal) -> bool {
    can_complete_on(goal, completion_date_today())
}

/// Days left before a weekly goal becomes available again.
pub fn days_until_available(goal: &Goal, today: NaiveDate) -> u32 {
    if can_complete_on(goal, today) {
        return 0;
    }
    goal.last_completed_date
        .map(|last| WEEKLY_COOLDOWN_DAYS - days_elapsed(last, today))
        .and_then(|days| u32::try_from(days).ok())
        .unwrap_or(0)
}
