//! JSON-file-backed transcript store.

use std::fs;
use std::path::{Path, PathBuf};

use super::{StoreError, TranscriptStore};
use crate::session::LogEntry;

/// Store file name. The `-v1` suffix is the only versioning there is: an
/// incompatible format change bumps the suffix and orphans old transcripts
/// instead of migrating them.
pub const STORE_FILE: &str = "terminal-log-v1.json";

/// Persists the transcript as one JSON array of `{t, cmd?}` records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store under the platform data dir (`~/.local/share/folioterm` on Linux).
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folioterm")
            .join(STORE_FILE)
    }

    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LogEntry>, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, entries: &[LogEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
