//! In-memory transcript store for tests and `--fresh` runs.

use std::io;
use std::sync::{Arc, Mutex};

use super::{StoreError, TranscriptStore};
use crate::session::LogEntry;

/// Holds the transcript in memory. Clones share the same backing storage, so
/// a test can keep a [`MemoryStore::handle`] while the session owns the
/// original.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<Vec<LogEntry>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already contains a transcript.
    pub fn preloaded(entries: Vec<LogEntry>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(entries))),
        }
    }

    /// Another view onto the same backing storage.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// The last saved transcript, if any.
    pub fn snapshot(&self) -> Option<Vec<LogEntry>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<LogEntry>>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TranscriptStore for MemoryStore {
    fn load(&self) -> Result<Vec<LogEntry>, StoreError> {
        self.lock().clone().ok_or_else(|| {
            StoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no transcript stored",
            ))
        })
    }

    fn save(&self, entries: &[LogEntry]) -> Result<(), StoreError> {
        *self.lock() = Some(entries.to_vec());
        Ok(())
    }
}
