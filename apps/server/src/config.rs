use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use streakboard_storage_memory::StorageConfig;

/// Server configuration loaded from `SB_*` environment variables.
///
/// | Env Var                 | Default        |
/// |-------------------------|----------------|
/// | `SB_LISTEN_ADDR`        | `0.0.0.0:8080` |
/// | `SB_SEED_PATH`          | embedded seed  |
/// | `SB_LATENCY_SCALE`      | `1.0`          |
/// | `SB_REQUEST_TIMEOUT_MS` | `30000`        |
/// | `SB_CORS_ALLOW_ORIGINS` | `*`            |
/// | `SB_LOG_FORMAT`         | `text`         |
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
    pub latency_scale: f64,
    pub request_timeout: Duration,
    /// Allowed origins; a single `*` allows any.
    pub cors_allow_origins: Vec<String>,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_path: None,
            latency_scale: 1.0,
            request_timeout: Duration::from_millis(30_000),
            cors_allow_origins: vec!["*".to_string()],
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let listen_addr = match env_var("SB_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("SB_LISTEN_ADDR is not a socket address: {addr}"))?,
            None => defaults.listen_addr,
        };

        let latency_scale = match env_var("SB_LATENCY_SCALE") {
            Some(scale) => scale
                .parse::<f64>()
                .with_context(|| format!("SB_LATENCY_SCALE is not a number: {scale}"))?,
            None => defaults.latency_scale,
        };

        let request_timeout = match env_var("SB_REQUEST_TIMEOUT_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse()
                    .with_context(|| format!("SB_REQUEST_TIMEOUT_MS is not an integer: {ms}"))?,
            ),
            None => defaults.request_timeout,
        };

        let cors_allow_origins = match env_var("SB_CORS_ALLOW_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => defaults.cors_allow_origins,
        };

        Ok(Self {
            listen_addr,
            seed_path: env_var("SB_SEED_PATH").map(PathBuf::from),
            latency_scale,
            request_timeout,
            cors_allow_origins,
            log_format: env_var("SB_LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::with_latency_scale(self.latency_scale)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.cors_allow_origins, vec!["*"]);
        assert_eq!(config.storage_config().latency_scale, 1.0);
    }
}
