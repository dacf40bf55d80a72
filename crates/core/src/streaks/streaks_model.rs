//! Streak engine models and counter transitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeType};
use crate::completions::Completion;
use crate::goals::Goal;

/// Result of toggling a completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    /// The goal as persisted after the toggle.
    pub goal: Goal,
    /// `true` on the complete path, `false` on the un-complete path.
    pub completion_added: bool,
    /// The completion that was created or removed.
    pub completion: Completion,
    /// Badges issued by this toggle, possibly empty.
    pub new_badges: Vec<Badge>,
    /// Milestones reached whose badge could not be stored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_badges: Vec<BadgeType>,
}

/// Whether the completion control for a goal is currently usable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub can_complete_today: bool,
    pub completed_today: bool,
    /// Days until a weekly goal may be completed again; 0 when available.
    pub days_until_available: u32,
}

/// A goal's streak counters, detached from the rest of the record.
///
/// `current` counts up on complete and down (floored at zero) on un-complete;
/// `best` only ever rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakCounters {
    pub current: u32,
    pub best: u32,
    pub last_completed_date: Option<NaiveDate>,
}

impl StreakCounters {
    pub fn of(goal: &Goal) -> Self {
        Self {
            current: goal.current_streak,
            best: goal.best_streak,
            last_completed_date: goal.last_completed_date,
        }
    }

    /// Counters after completing the goal on `date`.
    pub fn completed(self, date: NaiveDate) -> Self {
        let current = self.current.saturating_add(1);
        Self {
            current,
            best: self.best.max(current),
            last_completed_date: Some(date),
        }
    }

    /// Counters after removing a completion.
    ///
    /// `last_completed_date` is only cleared once the streak is fully unwound;
    /// otherwise it keeps pointing at the removed date.
    pub fn uncompleted(self) -> Self {
        let current = self.current.saturating_sub(1);
        Self {
            current,
            best: self.best,
            last_completed_date: if current == 0 {
                None
            } else {
                self.last_completed_date
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn counters(current: u32, best: u32, last: Option<NaiveDate>) -> StreakCounters {
        StreakCounters {
            current,
            best,
            last_completed_date: last,
        }
    }

    #[test]
    fn test_completed_raises_best_only_on_new_maximum() {
        let below = counters(6, 10, Some(date(1))).completed(date(2));
        assert_eq!(below, counters(7, 10, Some(date(2))));

        let at_max = counters(10, 10, Some(date(1))).completed(date(2));
        assert_eq!(at_max, counters(11, 11, Some(date(2))));
    }

    #[test]
    fn test_uncompleted_floors_at_zero_and_clears_date() {
        assert_eq!(
            counters(0, 3, None).uncompleted(),
            counters(0, 3, None)
        );
        assert_eq!(
            counters(1, 3, Some(date(5))).uncompleted(),
            counters(0, 3, None)
        );
    }

    #[test]
    fn test_uncompleted_keeps_stale_date_while_streak_positive() {
        assert_eq!(
            counters(7, 10, Some(date(9))).uncompleted(),
            counters(6, 10, Some(date(9)))
        );
    }

    #[test]
    fn test_complete_then_uncomplete_restores_current_and_date() {
        let start = counters(0, 4, None);
        let round_trip = start.completed(date(3)).uncompleted();
        assert_eq!(round_trip, start);
    }
}
