//! Completion domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Record that a goal's cadence requirement was met on a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub id: i64,
    pub goal_id: i64,
    /// Dedup key together with `goal_id`.
    pub date: NaiveDate,
    /// Audit timestamp; not used in streak math.
    pub completed_at: DateTime<Utc>,
}

impl Completion {
    pub fn from_new(id: i64, new_completion: NewCompletion, now: DateTime<Utc>) -> Self {
        Self {
            id,
            goal_id: new_completion.goal_id,
            date: new_completion.date,
            completed_at: new_completion.completed_at.unwrap_or(now),
        }
    }

    pub fn apply(&mut self, update: CompletionUpdate) {
        if let Some(goal_id) = update.goal_id {
            self.goal_id = goal_id;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(completed_at) = update.completed_at {
            self.completed_at = completed_at;
        }
    }

    pub fn matches(&self, goal_id: i64, date: NaiveDate) -> bool {
        self.goal_id == goal_id && self.date == date
    }
}

/// Input model for recording a completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompletion {
    pub goal_id: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl NewCompletion {
    pub fn new(goal_id: i64, date: NaiveDate) -> Self {
        Self {
            goal_id,
            date,
            completed_at: None,
        }
    }
}

/// Patch for the generic update primitive. The engine never updates completions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompletionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
