use async_trait::async_trait;
use chrono::Utc;

use streakboard_core::completions::{
    Completion, CompletionRepositoryTrait, CompletionUpdate, NewCompletion,
};
use streakboard_core::Result;

use crate::latency::LatencyProfile;
use crate::store::EntityStore;

pub struct CompletionRepository {
    store: EntityStore<Completion>,
}

impl CompletionRepository {
    pub fn new(completions: Vec<Completion>, latency: LatencyProfile) -> Self {
        CompletionRepository {
            store: EntityStore::new(completions, latency),
        }
    }

    /// Underlying store, for fault injection.
    pub fn store(&self) -> &EntityStore<Completion> {
        &self.store
    }
}

#[async_trait]
impl CompletionRepositoryTrait for CompletionRepository {
    async fn get_all(&self) -> Result<Vec<Completion>> {
        self.store.get_all().await
    }

    async fn get_by_id(&self, completion_id: i64) -> Result<Completion> {
        self.store.get_by_id(completion_id).await
    }

    async fn get_by_goal_id(&self, goal_id: i64) -> Result<Vec<Completion>> {
        self.store.filter(move |c| c.goal_id == goal_id).await
    }

    async fn create(&self, new_completion: NewCompletion) -> Result<Completion> {
        self.store
            .create(move |id| Completion::from_new(id, new_completion, Utc::now()))
            .await
    }

    async fn update(
        &self,
        completion_id: i64,
        completion_update: CompletionUpdate,
    ) -> Result<Completion> {
        self.store
            .update(completion_id, move |c| c.apply(completion_update))
            .await
    }

    async fn delete(&self, completion_id: i64) -> Result<Completion> {
        self.store.delete(completion_id).await
    }
}
