//! Cursor Chat Formatter - Reformat a recorded Cursor conversation in place.
//!
//! Usage:
//!   cursor-chat-formatter chat.md             # Rewrite chat.md
//!   cursor-chat-formatter -n chat.md          # Print the result, keep the file
//!   cursor-chat-formatter -v chat.md          # Also show block statistics

mod cli;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use cursor_chat_formatter::application::{format_stats, process_file, WriteMode};
use cursor_chat_formatter::domain::{self, AppConfig, AppError};
use cursor_chat_formatter::infrastructure::{load_config, load_config_from_file, resolve_path};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "❌".red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let mode = cli.write_mode();
    let file = cli.file.as_deref().ok_or(AppError::MissingArgument)?;

    let path = resolve_path(file)?;
    if !path.exists() {
        return Err(AppError::FileNotFound { path });
    }

    let config = load_app_config(cli.config.as_deref())?
        .with_overrides(cli.user_label, cli.assistant_label);

    let stats = {
        let mut stdout = std::io::stdout().lock();
        process_file(&path, &config.labels, mode, &mut stdout)?
    };

    if mode == WriteMode::InPlace {
        println!(
            "{} {}",
            "✅ Formatted file:".green().bold(),
            path.display()
        );
    }

    if cli.verbose > 0 {
        eprintln!("{}", format_stats(&stats));
    }

    Ok(())
}

/// Load the explicit config file, or the default one if present.
fn load_app_config(path: Option<&Path>) -> domain::Result<AppConfig> {
    path.map_or_else(load_config, load_config_from_file)
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
