//! Badges module - models, classification table, services, and traits.

mod badges_constants;
mod badges_model;
mod badges_service;
mod badges_traits;

pub use badges_constants::*;
pub use badges_model::{Badge, BadgeType, BadgeUpdate, BadgeView, NewBadge};
pub use badges_service::BadgeService;
pub use badges_traits::{BadgeRepositoryTrait, BadgeServiceTrait};
