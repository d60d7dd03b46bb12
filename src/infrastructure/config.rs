//! Configuration file management.
//!
//! Handles loading TOML configuration files.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Example configuration file content.
#[cfg(test)]
const EXAMPLE_CONFIG: &str = r#"# Cursor Chat Formatter Configuration

[labels]
# Heading text after the 👤 emoji
user = "User"

# Heading text after the 🤖 emoji
assistant = "Assistant"
"#;

/// Load configuration from the default location, or defaults if absent.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppConfig> {
    let config_path = AppConfig::default_config_path();

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        tracing::debug!("No config file, using defaults");
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    let config = toml::from_str(&content)
        .map_err(|e| AppError::config(format!("Failed to parse config file: {e}")))?;

    tracing::debug!(path = %path.display(), "Loaded configuration");

    Ok(config)
}
