//! Cursor Chat Formatter - reformat recorded Cursor conversations into readable Markdown.
//!
//! A transcript is a sequence of turns separated by `---` lines, each tagged with
//! `**User**` or `**Cursor**`. Formatting adds emoji role headings, normalizes
//! blank lines, demotes assistant section headings and indents list items.
//!
//! ```
//! let out = cursor_chat_formatter::format("**User**\nHello\n---\n**Cursor**\nHi there\n");
//! assert!(out.contains("## 👤"));
//! assert!(out.contains("## 🤖"));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{format, format_conversation, process_file, FormattedDocument, WriteMode};
pub use domain::{AppError, Labels, Result};
