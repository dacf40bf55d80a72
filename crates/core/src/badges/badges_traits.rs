//! Badge repository and service traits.

use async_trait::async_trait;

use super::badges_model::{Badge, BadgeUpdate, BadgeView, NewBadge};
use crate::errors::Result;

/// Trait defining the contract for Badge repository operations.
///
/// `update` and `delete` exist for completeness of the store contract; the
/// streak engine only ever appends.
#[async_trait]
pub trait BadgeRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Badge>>;

    async fn get_by_id(&self, badge_id: i64) -> Result<Badge>;

    async fn get_by_goal_id(&self, goal_id: i64) -> Result<Vec<Badge>>;

    async fn create(&self, new_badge: NewBadge) -> Result<Badge>;

    async fn update(&self, badge_id: i64, badge_update: BadgeUpdate) -> Result<Badge>;

    async fn delete(&self, badge_id: i64) -> Result<Badge>;
}

/// Read side of the badge showcase.
#[async_trait]
pub trait BadgeServiceTrait: Send + Sync {
    /// All badges with their display descriptors, most recent first.
    async fn list_badges(&self) -> Result<Vec<BadgeView>>;

    async fn list_badges_for_goal(&self, goal_id: i64) -> Result<Vec<BadgeView>>;
}
