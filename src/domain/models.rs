//! Domain models for conversation transcripts.
//!
//! A transcript is split into blocks, one per conversational turn. Each block is
//! classified by the speaker marker it carries.

use serde::Deserialize;

/// Literal line separating two turns (flanked by newlines).
pub const BLOCK_DELIMITER: &str = "\n---\n";

/// Marker identifying a user turn.
pub const USER_MARKER: &str = "**User**";

/// Marker identifying an assistant (Cursor) turn.
pub const ASSISTANT_MARKER: &str = "**Cursor**";

/// Speaker role of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Turn written by the user (human).
    User,
    /// Turn written by the assistant.
    Assistant,
    /// Anything without a speaker marker (preamble, notes, malformed input).
    Other,
}

impl Role {
    /// Classifies a block by substring search. The user marker wins when both are present.
    #[must_use]
    pub fn classify(block: &str) -> Self {
        if block.contains(USER_MARKER) {
            Self::User
        } else if block.contains(ASSISTANT_MARKER) {
            Self::Assistant
        } else {
            Self::Other
        }
    }

    /// The marker that identifies this role, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::User => Some(USER_MARKER),
            Self::Assistant => Some(ASSISTANT_MARKER),
            Self::Other => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Assistant => write!(f, "Assistant"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Heading labels written after the role emoji.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Labels {
    /// Label for user turns.
    #[serde(default = "default_user_label")]
    pub user: String,

    /// Label for assistant turns.
    #[serde(default = "default_assistant_label")]
    pub assistant: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            user: default_user_label(),
            assistant: default_assistant_label(),
        }
    }
}

fn default_user_label() -> String {
    "用户".to_string()
}

fn default_assistant_label() -> String {
    "AI".to_string()
}

/// Summary statistics for one formatting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatStats {
    /// Number of blocks found.
    pub block_count: usize,
    /// Blocks classified as user turns.
    pub user_blocks: usize,
    /// Blocks classified as assistant turns.
    pub assistant_blocks: usize,
    /// Blocks passed through without a heading.
    pub other_blocks: usize,
}

impl FormatStats {
    /// Records one classified block.
    pub fn record(&mut self, role: Role) {
        self.block_count += 1;
        match role {
            Role::User => self.user_blocks += 1,
            Role::Assistant => self.assistant_blocks += 1,
            Role::Other => self.other_blocks += 1,
        }
    }
}
