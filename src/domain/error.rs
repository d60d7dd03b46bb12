//! Domain-level error types for cursor-chat-formatter.
//!
//! All errors are typed with `thiserror`. The `Display` output of each variant
//! is exactly what the user sees on stderr before the process exits.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level errors. Every variant is fatal and maps to exit code 1.
#[derive(Error, Debug)]
pub enum AppError {
    /// No file path was given on the command line.
    #[error("Please provide the path of the conversation file to format")]
    MissingArgument,

    /// The resolved path does not exist.
    #[error("File does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading, transforming or writing the file failed.
    #[error("Failed to process file: {message}")]
    Processing {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AppError {
    /// Create a processing error from an IO error.
    ///
    /// The underlying error description is surfaced verbatim.
    pub fn processing(err: std::io::Error) -> Self {
        Self::Processing {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error from a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
