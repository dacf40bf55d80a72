//! Completion repository trait.

use async_trait::async_trait;

use super::completions_model::{Completion, CompletionUpdate, NewCompletion};
use crate::errors::Result;

/// Trait defining the contract for Completion repository operations.
///
/// The repository does not enforce one completion per (goal, date); the
/// streak engine does, under its per-goal lock.
#[async_trait]
pub trait CompletionRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Completion>>;

    async fn get_by_id(&self, completion_id: i64) -> Result<Completion>;

    /// Completions recorded for one goal, in insertion order.
    async fn get_by_goal_id(&self, goal_id: i64) -> Result<Vec<Completion>>;

    async fn create(&self, new_completion: NewCompletion) -> Result<Completion>;

    async fn update(
        &self,
        completion_id: i64,
        completion_update: CompletionUpdate,
    ) -> Result<Completion>;

    async fn delete(&self, completion_id: i64) -> Result<Completion>;
}
