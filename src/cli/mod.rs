//! CLI interface using clap.
//!
//! Provides command-line arguments for the tool.

use std::path::PathBuf;

use clap::Parser;

use cursor_chat_formatter::application::WriteMode;

/// Cursor Chat Formatter - Reformat exported Cursor conversations into readable Markdown.
///
/// The file is rewritten in place unless --dry-run is given.
#[derive(Parser, Debug)]
#[command(name = "cursor-chat-formatter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Conversation file to format.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.cursor-chat-formatter/config.toml).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Heading label for user turns.
    #[arg(long)]
    pub user_label: Option<String>,

    /// Heading label for assistant turns.
    #[arg(long)]
    pub assistant_label: Option<String>,

    /// Print the formatted document instead of overwriting the file.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Cli {
    /// Selected write mode.
    pub const fn write_mode(&self) -> WriteMode {
        if self.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::InPlace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = Cli::parse_from([
            "cursor-chat-formatter",
            "-vv",
            "--dry-run",
            "--user-label",
            "Me",
            "chat.md",
        ]);
        assert_eq!(cli.file, Some(PathBuf::from("chat.md")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.user_label.as_deref(), Some("Me"));
        assert_eq!(cli.write_mode(), WriteMode::DryRun);
    }

    #[test]
    fn test_file_is_optional() {
        let cli = Cli::parse_from(["cursor-chat-formatter"]);
        assert!(cli.file.is_none());
        assert_eq!(cli.write_mode(), WriteMode::InPlace);
    }
}
