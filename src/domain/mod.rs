//! Domain layer - core types and errors.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (filesystem, terminal, etc.).

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::{FormatStats, Labels, Role, ASSISTANT_MARKER, BLOCK_DELIMITER, USER_MARKER};
