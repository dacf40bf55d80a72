use std::sync::Arc;

use streakboard_core::{
    badges::{BadgeService, BadgeServiceTrait},
    completions::CompletionRepositoryTrait,
    events::DomainEventSink,
    goals::{GoalService, GoalServiceTrait},
    stats::{StatsService, StatsServiceTrait},
    streaks::{StreakService, StreakServiceTrait},
};
use streakboard_storage_memory::{MemoryStorage, SeedData};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, domain_events::WebDomainEventSink};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub streak_service: Arc<dyn StreakServiceTrait>,
    pub badge_service: Arc<dyn BadgeServiceTrait>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
    pub completion_repository: Arc<dyn CompletionRepositoryTrait>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn load_seed(config: &Config) -> anyhow::Result<SeedData> {
    let seed = match &config.seed_path {
        Some(path) => SeedData::from_path(path)?,
        None => {
            tracing::info!("No SB_SEED_PATH set, using embedded seed data");
            SeedData::embedded()?
        }
    };
    Ok(seed)
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let seed = load_seed(config)?;
    let storage = MemoryStorage::new(seed, &config.storage_config());
    Ok(state_from_storage(&storage))
}

/// Wires services over an existing storage instance.
pub fn state_from_storage(storage: &MemoryStorage) -> Arc<AppState> {
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(WebDomainEventSink::new());

    let goal_service = Arc::new(GoalService::new(
        storage.goals.clone(),
        event_sink.clone(),
    ));
    let streak_service = Arc::new(StreakService::new(
        storage.goals.clone(),
        storage.completions.clone(),
        storage.badges.clone(),
        event_sink,
    ));
    let badge_service = Arc::new(BadgeService::new(storage.badges.clone()));
    let stats_service = Arc::new(StatsService::new(
        storage.goals.clone(),
        storage.completions.clone(),
    ));

    Arc::new(AppState {
        goal_service,
        streak_service,
        badge_service,
        stats_service,
        completion_repository: storage.completions.clone(),
    })
}
