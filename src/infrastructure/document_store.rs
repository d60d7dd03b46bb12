//! Filesystem access for conversation documents.
//!
//! Documents are read and written whole. No temp file, no backup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Resolves a command-line path to an absolute path relative to the current directory.
///
/// # Errors
/// Returns error if the current directory cannot be determined.
pub fn resolve_path(arg: &Path) -> Result<PathBuf> {
    std::path::absolute(arg).map_err(AppError::processing)
}

/// Reads a whole document as UTF-8.
///
/// # Errors
/// Returns error if the file is missing, unreadable or not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(AppError::processing)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read document");
    Ok(content)
}

/// Overwrites a document in full.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(AppError::processing)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote document");
    Ok(())
}
