//! Transcript persistence.

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, STORE_FILE};
pub use memory::MemoryStore;

use crate::session::LogEntry;

/// Errors from loading or saving a transcript.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transcript is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Storage collaborator for the session transcript.
///
/// Both operations are best-effort from the session's point of view: a failed
/// load falls back to the welcome transcript, a failed save is logged and
/// dropped.
pub trait TranscriptStore {
    fn load(&self) -> Result<Vec<LogEntry>, StoreError>;
    fn save(&self, entries: &[LogEntry]) -> Result<(), StoreError>;
}
