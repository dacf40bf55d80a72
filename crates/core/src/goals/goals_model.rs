//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Target cadence of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

/// Domain model representing a trackable habit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub created_at: DateTime<Utc>,
    pub is_archived: bool,
    /// Consecutive qualifying periods ending at the most recent completion.
    pub current_streak: u32,
    /// High-water mark of `current_streak`.
    pub best_streak: u32,
    pub last_completed_date: Option<NaiveDate>,
}

impl Goal {
    /// Builds a freshly created goal with lifecycle defaults applied.
    pub fn from_new(id: i64, new_goal: NewGoal, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new_goal.title,
            description: new_goal.description,
            frequency: new_goal.frequency,
            created_at: new_goal.created_at.unwrap_or(now),
            is_archived: false,
            current_streak: 0,
            best_streak: 0,
            last_completed_date: None,
        }
    }

    /// Applies a typed patch in place. Fields absent from the patch are preserved.
    pub fn apply(&mut self, update: GoalUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(frequency) = update.frequency {
            self.frequency = frequency;
        }
        if let Some(is_archived) = update.is_archived {
            self.is_archived = is_archived;
        }
        if let Some(current_streak) = update.current_streak {
            self.current_streak = current_streak;
        }
        if let Some(best_streak) = update.best_streak {
            self.best_streak = best_streak;
        }
        if let Some(last_completed_date) = update.last_completed_date {
            self.last_completed_date = last_completed_date;
        }
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            title: title.into(),
            description: None,
            frequency,
            created_at: None,
        }
    }

    /// Trims text fields and rejects an empty title.
    pub fn normalized(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title is required".to_string(),
            )));
        }
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Ok(Self {
            title,
            description,
            ..self
        })
    }
}

/// Patch for an existing goal.
///
/// `id` and `created_at` are not patchable. The streak counters are not part
/// of the wire format either: only the streak engine sets them, through
/// [`GoalUpdate::streak`], while it holds the goal's lock. `description` uses
/// a double option so a patch can tell "leave unchanged" (absent) from
/// "clear" (`null`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GoalUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip)]
    pub(crate) current_streak: Option<u32>,
    #[serde(skip)]
    pub(crate) best_streak: Option<u32>,
    #[serde(skip)]
    pub(crate) last_completed_date: Option<Option<NaiveDate>>,
}

impl GoalUpdate {
    /// Patch carrying only the streak counters produced by a toggle.
    pub(crate) fn streak(
        current_streak: u32,
        best_streak: u32,
        last_completed_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            current_streak: Some(current_streak),
            best_streak: Some(best_streak),
            last_completed_date: Some(last_completed_date),
            ..Self::default()
        }
    }

    pub fn archived(is_archived: bool) -> Self {
        Self {
            is_archived: Some(is_archived),
            ..Self::default()
        }
    }

    pub fn retitled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Whether the patch writes any streak counter.
    pub fn touches_streak(&self) -> bool {
        self.current_streak.is_some()
            || self.best_streak.is_some()
            || self.last_completed_date.is_some()
    }
}
