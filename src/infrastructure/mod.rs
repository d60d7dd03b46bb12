//! Infrastructure layer - external adapters (filesystem, config files).
//!
//! This layer handles all I/O operations.

pub mod config;
pub mod document_store;

pub use config::{load_config, load_config_from_file};
pub use document_store::{read_document, resolve_path, write_document};
