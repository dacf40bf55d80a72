use async_trait::async_trait;
use chrono::Utc;

use streakboard_core::badges::{Badge, BadgeRepositoryTrait, BadgeUpdate, NewBadge};
use streakboard_core::Result;

use crate::latency::LatencyProfile;
use crate::store::EntityStore;

pub struct BadgeRepository {
    store: EntityStore<Badge>,
}

impl BadgeRepository {
    pub fn new(badges: Vec<Badge>, latency: LatencyProfile) -> Self {
        BadgeRepository {
            store: EntityStore::new(badges, latency),
        }
    }

    /// Underlying store, for fault injection.
    pub fn store(&self) -> &EntityStore<Badge> {
        &self.store
    }
}

#[async_trait]
impl BadgeRepositoryTrait for BadgeRepository {
    async fn get_all(&self) -> Result<Vec<Badge>> {
        self.store.get_all().await
    }

    async fn get_by_id(&self, badge_id: i64) -> Result<Badge> {
        self.store.get_by_id(badge_id).await
    }

    async fn get_by_goal_id(&self, goal_id: i64) -> Result<Vec<Badge>> {
        self.store.filter(move |b| b.goal_id == goal_id).await
    }

    async fn create(&self, new_badge: NewBadge) -> Result<Badge> {
        self.store
            .create(move |id| Badge::from_new(id, new_badge, Utc::now()))
            .await
    }

    async fn update(&self, badge_id: i64, badge_update: BadgeUpdate) -> Result<Badge> {
        self.store
            .update(badge_id, move |b| b.apply(badge_update))
            .await
    }

    async fn delete(&self, badge_id: i64) -> Result<Badge> {
        self.store.delete(badge_id).await
    }
}
