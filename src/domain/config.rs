//! Application configuration model.

use std::path::PathBuf;

use serde::Deserialize;

use super::models::Labels;

/// Complete application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Heading labels.
    #[serde(default)]
    pub labels: Labels,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cursor-chat-formatter")
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Apply command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, user: Option<String>, assistant: Option<String>) -> Self {
        if let Some(user) = user {
            self.labels.user = user;
        }
        if let Some(assistant) = assistant {
            self.labels.assistant = assistant;
        }
        self
    }
}
