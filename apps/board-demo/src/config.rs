//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use board_infra::InMemoryPostStoreConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: InMemoryPostStoreConfig,
    /// Author name filled into every comment form at startup.
    pub author: Option<String>,
    /// How long the feed waits for the initial post list.
    pub load_timeout: Duration,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            store: InMemoryPostStoreConfig::from_env(),
            author: env::var("BOARD_AUTHOR")
                .ok()
                .filter(|a| !a.trim().is_empty()),
            load_timeout: Duration::from_millis(
                env::var("FEED_LOAD_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5000),
            ),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
