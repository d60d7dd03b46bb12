//! Application layer - use cases and orchestration.
//!
//! This layer contains the conversation formatter and the
//! file-processing use case built on top of it.

pub mod formatter;
pub mod processor;

pub use formatter::{format, format_conversation, format_stats, FormattedDocument};
pub use processor::{process_file, WriteMode};
