//! Transcript log entries.

use serde::{Deserialize, Serialize};

/// A single line in the terminal transcript.
///
/// The serialized form matches the persisted records exactly:
/// `{"t": "...", "cmd": true}`, with `cmd` omitted for plain output lines.
/// Echo lines store the full rendered text (prompt marker included) because
/// the persisted transcript is the rendering source of truth after reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Rendered line text
    #[serde(rename = "t")]
    pub text: String,
    /// True when this line echoes a submitted command
    #[serde(rename = "cmd", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_command_echo: bool,
}

impl LogEntry {
    /// A plain output line.
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_command_echo: false,
        }
    }

    /// An echo line reproducing submitted input.
    pub fn echo(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_command_echo: true,
        }
    }
}
