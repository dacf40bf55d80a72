//! Domain event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::BadgeType;

/// Domain events emitted by core services after successful mutations.
///
/// Runtime adapters translate them into user-facing notifications
/// ("Goal completed", "Badge earned: Week Warrior", ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was created.
    GoalCreated { goal_id: i64 },

    /// A goal was archived or restored.
    GoalArchiveToggled { goal_id: i64, is_archived: bool },

    /// A completion was added (`completed = true`) or removed for a date.
    CompletionToggled {
        goal_id: i64,
        date: NaiveDate,
        completed: bool,
        current_streak: u32,
    },

    /// A streak milestone issued a badge.
    BadgeEarned {
        badge_id: i64,
        goal_id: i64,
        badge_type: BadgeType,
    },
}

impl DomainEvent {
    /// Creates a GoalCreated event.
    pub fn goal_created(goal_id: i64) -> Self {
        Self::GoalCreated { goal_id }
    }

    /// Creates a GoalArchiveToggled event.
    pub fn goal_archive_toggled(goal_id: i64, is_archived: bool) -> Self {
        Self::GoalArchiveToggled {
            goal_id,
            is_archived,
        }
    }

    /// Creates a CompletionToggled event.
    pub fn completion_toggled(
        goal_id: i64,
        date: NaiveDate,
        completed: bool,
        current_streak: u32,
    ) -> Self {
        Self::CompletionToggled {
            goal_id,
            date,
            completed,
            current_streak,
        }
    }

    /// Creates a BadgeEarned event.
    pub fn badge_earned(badge_id: i64, goal_id: i64, badge_type: BadgeType) -> Self {
        Self::BadgeEarned {
            badge_id,
            goal_id,
            badge_type,
        }
    }
}
