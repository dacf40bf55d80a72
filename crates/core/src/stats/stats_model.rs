//! Dashboard statistics models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers shown above the goal list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    /// Goals that are not archived.
    pub active_goals: usize,
    /// Completions recorded for today, across all goals.
    pub completed_today: usize,
    /// Sum of `current_streak` over active goals.
    pub total_streak_days: u64,
    /// Percentage (0..=100) of possible completions made this week.
    pub weekly_progress: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Completion history of one goal for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionCalendar {
    pub goal_id: i64,
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
    pub completed_days: usize,
}
