//! Streak engine trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::streaks_model::{Eligibility, ToggleOutcome};
use crate::errors::Result;
use crate::goals::Goal;

/// Trait defining the Streak & Achievement Engine.
#[async_trait]
pub trait StreakServiceTrait: Send + Sync {
    /// Toggles the completion of `goal_id` on `date` (today when `None`).
    ///
    /// Removes the completion if one exists for that date, otherwise records
    /// one, then updates the goal's streak counters and, on the complete
    /// path, issues any milestone badges. Neither archival nor weekly
    /// eligibility is checked here.
    async fn toggle_completion(
        &self,
        goal_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<ToggleOutcome>;

    /// Toggles today's completion on behalf of the goal list.
    ///
    /// Refuses archived goals, and refuses to complete a goal that is not
    /// eligible today. Un-completing is always allowed.
    async fn toggle_today(&self, goal_id: i64) -> Result<ToggleOutcome>;

    /// Whether a completion exists for (`goal_id`, `date`).
    async fn is_completed_on(&self, goal_id: i64, date: NaiveDate) -> Result<bool>;

    /// Eligibility of the completion control for today.
    async fn get_eligibility(&self, goal_id: i64) -> Result<Eligibility>;

    /// Advisory gate: daily goals always, weekly goals after a 7-day cooldown.
    fn can_complete_today(&self, goal: &Goal) -> bool;
}
