use serde::Serialize;

use super::badges_model::BadgeType;

/// Display descriptor for a badge kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const WEEK_WARRIOR: BadgeDescriptor = BadgeDescriptor {
    name: "Week Warrior",
    description: "7-day streak",
    icon: "Flame",
};

pub const MONTH_MASTER: BadgeDescriptor = BadgeDescriptor {
    name: "Month Master",
    description: "30-day streak",
    icon: "Crown",
};

pub const CENTURY_CHAMPION: BadgeDescriptor = BadgeDescriptor {
    name: "Century Champion",
    description: "100-day streak",
    icon: "Trophy",
};

pub const GENERIC_ACHIEVEMENT: BadgeDescriptor = BadgeDescriptor {
    name: "Achievement",
    description: "Goal completed",
    icon: "Star",
};

/// Returns the display descriptor for a badge kind.
pub fn badge_descriptor(badge_type: BadgeType) -> &'static BadgeDescriptor {
    match badge_type {
        BadgeType::Streak7 => &WEEK_WARRIOR,
        BadgeType::Streak30 => &MONTH_MASTER,
        BadgeType::Streak100 => &CENTURY_CHAMPION,
        BadgeType::Achievement => &GENERIC_ACHIEVEMENT,
    }
}

/// Streak milestones and the badge each one issues.
///
/// Entries are evaluated independently on every completion.
pub const STREAK_BADGE_THRESHOLDS: &[(u32, BadgeType)] = &[
    (7, BadgeType::Streak7),
    (30, BadgeType::Streak30),
    (100, BadgeType::Streak100),
];

/// Badge kinds earned by a streak that has just reached `streak`.
pub fn badges_for_streak(streak: u32) -> Vec<BadgeType> {
    STREAK_BADGE_THRESHOLDS
        .iter()
        .filter(|(threshold, _)| *threshold == streak)
        .map(|(_, badge_type)| *badge_type)
        .collect()
}
