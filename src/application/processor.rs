//! File processing use case: read, format, write back.

use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, FormatStats, Labels, Result};
use crate::infrastructure::{read_document, write_document};

use super::formatter::format_conversation;

/// Where the formatted document goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the source file in full.
    #[default]
    InPlace,
    /// Print to the given writer, leave the file untouched.
    DryRun,
}

/// Formats the file at `path`.
///
/// In [`WriteMode::DryRun`] the result goes to `out` instead of the file.
///
/// # Errors
/// Returns `AppError::Processing` if reading or writing fails.
pub fn process_file<W: Write>(
    path: &Path,
    labels: &Labels,
    mode: WriteMode,
    out: &mut W,
) -> Result<FormatStats> {
    let content = read_document(path)?;
    let formatted = format_conversation(&content, labels);

    match mode {
        WriteMode::InPlace => write_document(path, &formatted.content)?,
        WriteMode::DryRun => {
            out.write_all(formatted.content.as_bytes())
                .and_then(|()| out.flush())
                .map_err(AppError::processing)?;
        }
    }

    Ok(formatted.stats)
}
