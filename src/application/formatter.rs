//! Conversation formatting.
//!
//! Turns a raw transcript (turns separated by `---` lines, tagged with
//! `**User**` / `**Cursor**`) into Markdown with emoji role headings.
//! The transform is pure: it takes the whole document and returns a new one.

use std::sync::LazyLock;

use colored::Colorize;
use regex::Regex;

use crate::domain::{FormatStats, Labels, Role, BLOCK_DELIMITER};

/// Runs of three or more newlines.
#[allow(clippy::expect_used)]
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank-run regex"));

/// Code fence openers that get a blank line in front of them.
#[allow(clippy::expect_used)]
static TAGGED_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(xml|plaintext)\n").expect("valid fence regex"));

/// Assistant section headings demoted one level.
const SECTION_EMOJIS: &[&str] = &["🎯", "🤔", "💡"];

/// A formatted document plus what was found while formatting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDocument {
    /// The reassembled document.
    pub content: String,
    /// Per-role block counts.
    pub stats: FormatStats,
}

/// Formats a conversation with the default labels.
#[must_use]
pub fn format(content: &str) -> String {
    format_conversation(content, &Labels::default()).content
}

/// Formats a whole conversation document.
///
/// The delimiter must match exactly (`\n---\n`); anything else is left inside
/// its block. Block order and count are preserved.
#[must_use]
pub fn format_conversation(content: &str, labels: &Labels) -> FormattedDocument {
    let mut stats = FormatStats::default();

    let blocks: Vec<String> = content
        .split(BLOCK_DELIMITER)
        .map(|block| {
            let block = collapse_blank_lines(trim_block(block));
            let role = Role::classify(&block);
            stats.record(role);
            format_block(&block, role, labels)
        })
        .collect();

    tracing::debug!(
        blocks = stats.block_count,
        user = stats.user_blocks,
        assistant = stats.assistant_blocks,
        other = stats.other_blocks,
        "Formatted conversation"
    );

    FormattedDocument {
        content: blocks.join(BLOCK_DELIMITER),
        stats,
    }
}

/// Formats a single, already normalized block according to its role.
fn format_block(block: &str, role: Role, labels: &Labels) -> String {
    let Some(marker) = role.marker() else {
        return block.to_string();
    };

    let body = block.replacen(marker, "", 1);
    let body = trim_block(&body);

    match role {
        Role::User => format!("\n\n## 👤 {}\n\n{body}\n", labels.user),
        Role::Assistant => format!(
            "\n\n## 🤖 {}\n\n{}\n",
            labels.assistant,
            restructure_assistant(body)
        ),
        Role::Other => block.to_string(),
    }
}

/// Applies the assistant-only rewrites, in order.
fn restructure_assistant(body: &str) -> String {
    let mut text = body.to_string();

    for emoji in SECTION_EMOJIS {
        text = text.replace(&format!("## {emoji}"), &format!("\n### {emoji}"));
    }

    let text = TAGGED_FENCE.replace_all(&text, "\n```${1}\n");
    let text = text.replace("```\n", "\n```\n");

    text.replace("\n- ", "\n  - ")
}

/// Trims surrounding whitespace.
///
/// A byte-order mark counts as whitespace, NEL (U+0085) does not.
fn trim_block(block: &str) -> &str {
    block.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Collapses every run of 3+ newlines to exactly 2.
fn collapse_blank_lines(block: &str) -> String {
    BLANK_RUN.replace_all(block, "\n\n").into_owned()
}

/// Formats statistics for display.
#[must_use]
pub fn format_stats(stats: &FormatStats) -> String {
    format!(
        "{}\n  Blocks: {}\n  User turns: {}\n  Assistant turns: {}\n  Other blocks: {}",
        "📊 Statistics".bold(),
        stats.block_count.to_string().cyan(),
        stats.user_blocks.to_string().green(),
        stats.assistant_blocks.to_string().blue(),
        stats.other_blocks.to_string().yellow()
    )
}
