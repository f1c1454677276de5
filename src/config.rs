use std::env;

use crate::store::DEFAULT_CAPACITY;

/// Runtime configuration for the evaluation runner and demo feed.
///
/// Indicator windows and vote weights are not configurable: they define the
/// signal semantics and stay fixed across deployments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds between evaluation ticks.
    pub eval_interval_secs: u64,
    /// Maximum points of history retained per symbol.
    pub history_capacity: usize,
    /// Unique ID for this engine instance, used in logs.
    pub instance_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            eval_interval_secs: env::var("EVAL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            history_capacity: env::var("HISTORY_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            instance_id: env::var("INSTANCE_ID").unwrap_or_else(|_| {
                // Generate a random ID if not specified
                uuid::Uuid::new_v4().to_string()
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
