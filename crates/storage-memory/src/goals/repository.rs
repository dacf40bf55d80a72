use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use streakboard_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use streakboard_core::Result;

use crate::latency::LatencyProfile;
use crate::store::EntityStore;

pub struct GoalRepository {
    store: EntityStore<Goal>,
}

impl GoalRepository {
    pub fn new(goals: Vec<Goal>, latency: LatencyProfile) -> Self {
        GoalRepository {
            store: EntityStore::new(goals, latency),
        }
    }

    /// Underlying store, for fault injection.
    pub fn store(&self) -> &EntityStore<Goal> {
        &self.store
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn get_all(&self) -> Result<Vec<Goal>> {
        self.store.get_all().await
    }

    async fn get_by_id(&self, goal_id: i64) -> Result<Goal> {
        self.store.get_by_id(goal_id).await
    }

    async fn create(&self, new_goal: NewGoal) -> Result<Goal> {
        let goal = self
            .store
            .create(move |id| Goal::from_new(id, new_goal, Utc::now()))
            .await?;
        debug!("Stored goal {} '{}'", goal.id, goal.title);
        Ok(goal)
    }

    async fn update(&self, goal_id: i64, goal_update: GoalUpdate) -> Result<Goal> {
        self.store
            .update(goal_id, move |goal| goal.apply(goal_update))
            .await
    }

    async fn delete(&self, goal_id: i64) -> Result<Goal> {
        self.store.delete(goal_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streakboard_core::goals::Frequency;

    #[tokio::test]
    async fn test_create_applies_goal_defaults() {
        let repo = GoalRepository::new(vec![], LatencyProfile::none());
        let goal = repo
            .create(NewGoal::new("Journal", Frequency::Weekly))
            .await
            .unwrap();

        assert_eq!(goal.id, 1);
        assert!(!goal.is_archived);
        assert_eq!(goal.current_streak, 0);
        assert_eq!(goal.best_streak, 0);
        assert_eq!(goal.last_completed_date, None);
        assert_eq!(repo.get_by_id(1).await.unwrap(), goal);
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let repo = GoalRepository::new(vec![], LatencyProfile::none());
        let goal = repo
            .create(NewGoal::new("Journal", Frequency::Daily))
            .await
            .unwrap();

        let updated = repo
            .update(goal.id, GoalUpdate::archived(true))
            .await
            .unwrap();
        assert!(updated.is_archived);
        assert_eq!(updated.title, "Journal");
        assert_eq!(updated.created_at, goal.created_at);
    }
}
