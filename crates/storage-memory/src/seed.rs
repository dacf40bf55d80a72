//! Seed data for the in-memory stores.

use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use streakboard_core::badges::Badge;
use streakboard_core::completions::Completion;
use streakboard_core::goals::Goal;
use streakboard_core::{Error, Result};

use crate::store::StoredEntity;

const EMBEDDED_SEED: &str = include_str!("../seed/seed.json");

/// Initial contents of the three stores. Collections are independent;
/// completions and badges are not checked against existing goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub completions: Vec<Completion>,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl SeedData {
    /// The demo data bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::SeedData(format!("{}: {}", path.display(), e)))?;
        let seed = Self::from_json(&json)?;
        info!(
            "Loaded seed from {}: {} goals, {} completions, {} badges",
            path.display(),
            seed.goals.len(),
            seed.completions.len(),
            seed.badges.len()
        );
        Ok(seed)
    }

    /// Rejects duplicate ids within a collection. Goals whose best streak
    /// trails the current one are accepted with a warning.
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids(&self.goals)?;
        ensure_unique_ids(&self.completions)?;
        ensure_unique_ids(&self.badges)?;

        for goal in self.goals.iter().filter(|g| g.best_streak < g.current_streak) {
            warn!(
                "Seeded goal {} has best streak {} below current streak {}",
                goal.id, goal.best_streak, goal.current_streak
            );
        }
        Ok(())
    }
}

fn ensure_unique_ids<T: StoredEntity>(entities: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(Error::SeedData(format!(
                "duplicate {} id {}",
                T::KIND,
                entity.id()
            )));
        }
    }
    Ok(())
}
