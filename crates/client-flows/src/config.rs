//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options recognized by the client application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the verification service
    pub api_base: String,
    /// Identity-provider environment identifier, passed through to the
    /// external SDK
    pub environment_id: Option<String>,
    /// Where the history log is persisted
    pub history_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:4000".to_string(),
            environment_id: None,
            history_path: PathBuf::from("history.json"),
        }
    }
}

impl ClientConfig {
    /// Build a configuration from environment variables (`API_BASE`,
    /// `ENVIRONMENT_ID`, `HISTORY_PATH`), with local-dev defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("API_BASE") {
            config.api_base = base;
        }
        if let Ok(env_id) = std::env::var("ENVIRONMENT_ID") {
            config.environment_id = Some(env_id);
        }
        if let Ok(path) = std::env::var("HISTORY_PATH") {
            config.history_path = PathBuf::from(path);
        }
        config
    }
}
