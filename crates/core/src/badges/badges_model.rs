//! Badge domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::badges_constants::{badge_descriptor, BadgeDescriptor};

/// Kind of achievement a badge records.
///
/// Unrecognised kinds read from storage collapse to [`BadgeType::Achievement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Streak7,
    Streak30,
    Streak100,
    #[serde(other)]
    Achievement,
}

impl BadgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeType::Streak7 => "streak7",
            BadgeType::Streak30 => "streak30",
            BadgeType::Streak100 => "streak100",
            BadgeType::Achievement => "achievement",
        }
    }
}

/// Immutable achievement record issued when a streak crosses a threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    pub goal_id: i64,
    pub earned_at: DateTime<Utc>,
}

impl Badge {
    pub fn from_new(id: i64, new_badge: NewBadge, now: DateTime<Utc>) -> Self {
        Self {
            id,
            badge_type: new_badge.badge_type,
            goal_id: new_badge.goal_id,
            earned_at: new_badge.earned_at.unwrap_or(now),
        }
    }

    pub fn apply(&mut self, update: BadgeUpdate) {
        if let Some(badge_type) = update.badge_type {
            self.badge_type = badge_type;
        }
        if let Some(earned_at) = update.earned_at {
            self.earned_at = earned_at;
        }
    }
}

/// Input model for issuing a badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewBadge {
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    pub goal_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

impl NewBadge {
    pub fn new(badge_type: BadgeType, goal_id: i64) -> Self {
        Self {
            badge_type,
            goal_id,
            earned_at: None,
        }
    }
}

/// Patch for the generic update primitive. Badges keep their goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BadgeUpdate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub badge_type: Option<BadgeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

/// A badge joined with its display descriptor, as shown in the showcase.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeView {
    #[serde(flatten)]
    pub badge: Badge,
    pub descriptor: &'static BadgeDescriptor,
}

impl From<Badge> for BadgeView {
    fn from(badge: Badge) -> Self {
        let descriptor = badge_descriptor(badge.badge_type);
        Self { badge, descriptor }
    }
}
