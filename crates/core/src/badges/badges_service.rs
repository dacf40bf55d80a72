use std::sync::Arc;

use async_trait::async_trait;

use super::badges_model::{Badge, BadgeView};
use super::badges_traits::{BadgeRepositoryTrait, BadgeServiceTrait};
use crate::errors::Result;

pub struct BadgeService {
    badge_repository: Arc<dyn BadgeRepositoryTrait>,
}

impl BadgeService {
    pub fn new(badge_repository: Arc<dyn BadgeRepositoryTrait>) -> Self {
        BadgeService { badge_repository }
    }

    fn into_views(mut badges: Vec<Badge>) -> Vec<BadgeView> {
        // Stable sort keeps insertion order for badges earned at the same instant.
        badges.sort_by(|a, b| b.earned_at.cmp(&a.earned_at));
        badges.into_iter().map(BadgeView::from).collect()
    }
}

#[async_trait]
impl BadgeServiceTrait for BadgeService {
    async fn list_badges(&self) -> Result<Vec<BadgeView>> {
        let badges = self.badge_repository.get_all().await?;
        Ok(Self::into_views(badges))
    }

    async fn list_badges_for_goal(&self, goal_id: i64) -> Result<Vec<BadgeView>> {
        let badges = self.badge_repository.get_by_goal_id(goal_id).await?;
        Ok(Self::into_views(badges))
    }
}
