//! Wiring of the three in-memory repositories.

use std::sync::Arc;

use log::info;

use crate::badges::BadgeRepository;
use crate::completions::CompletionRepository;
use crate::config::StorageConfig;
use crate::goals::GoalRepository;
use crate::latency::LatencyProfile;
use crate::seed::SeedData;

/// The goal, completion and badge repositories of one tracker instance.
///
/// Instances are independent: nothing here is process-global, so tests can
/// build as many as they like.
#[derive(Clone)]
pub struct MemoryStorage {
    pub goals: Arc<GoalRepository>,
    pub completions: Arc<CompletionRepository>,
    pub badges: Arc<BadgeRepository>,
}

impl MemoryStorage {
    pub fn new(seed: SeedData, config: &StorageConfig) -> Self {
        let scale = config.latency_scale;
        info!(
            "Initializing in-memory storage ({} goals, {} completions, {} badges, latency x{})",
            seed.goals.len(),
            seed.completions.len(),
            seed.badges.len(),
            scale
        );
        Self {
            goals: Arc::new(GoalRepository::new(
                seed.goals,
                LatencyProfile::GOALS.scaled(scale),
            )),
            completions: Arc::new(CompletionRepository::new(
                seed.completions,
                LatencyProfile::COMPLETIONS.scaled(scale),
            )),
            badges: Arc::new(BadgeRepository::new(
                seed.badges,
                LatencyProfile::BADGES.scaled(scale),
            )),
        }
    }

    /// Empty stores with no simulated latency.
    pub fn in_memory() -> Self {
        Self::new(SeedData::default(), &StorageConfig::without_latency())
    }
}
