//! Goal repository and service traits.

use async_trait::async_trait;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::errors::Result;

/// Trait defining the contract for Goal repository operations.
///
/// Implementations assign surrogate ids, apply lifecycle defaults on
/// creation, and always hand out copies of their records.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Returns every goal in insertion order.
    async fn get_all(&self) -> Result<Vec<Goal>>;

    /// Retrieves a goal by id, failing with NotFound when absent.
    async fn get_by_id(&self, goal_id: i64) -> Result<Goal>;

    /// Creates a goal with `is_archived = false` and zeroed streak counters.
    async fn create(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Applies a patch to an existing goal.
    async fn update(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal>;

    /// Removes a goal, returning the removed record.
    async fn delete(&self, goal_id: i64) -> Result<Goal>;
}

/// Trait defining the contract for Goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_goals(&self) -> Result<Vec<Goal>>;

    async fn get_goal(&self, goal_id: i64) -> Result<Goal>;

    /// Lists either the active or the archived goals.
    async fn list_goals(&self, archived: bool) -> Result<Vec<Goal>>;

    /// Creates a goal after trimming and validating its title.
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    async fn update_goal(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal>;

    /// Flips the archived flag. Streak counters are left untouched.
    async fn toggle_archive(&self, goal_id: i64) -> Result<Goal>;

    async fn delete_goal(&self, goal_id: i64) -> Result<Goal>;
}
