//! Storage configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by every in-memory store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Multiplier applied to the default per-operation latencies.
    /// `0.0` disables simulated latency entirely.
    pub latency_scale: f64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { latency_scale: 1.0 }
    }
}

impl StorageConfig {
    pub fn without_latency() -> Self {
        Self { latency_scale: 0.0 }
    }

    pub fn with_latency_scale(latency_scale: f64) -> Self {
        Self { latency_scale }
    }
}
