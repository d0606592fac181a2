//! Input history navigation.
//!
//! Shell-style Up/Down browsing over previously submitted inputs. The buffer
//! is append-only and never deduplicated; the cursor is `None` whenever the
//! user is not actively browsing. Editing the input cancels navigation so a
//! stale history index can never be resubmitted silently.

/// Result of a Down-arrow navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// Replace the input field with this entry
    Entry(String),
    /// Walked past the newest entry: stop navigating and clear the input
    ClearInput,
}

/// History buffer plus the optional navigation cursor.
///
/// Invariant: when the cursor is `Some(i)`, `i` is a valid index into the
/// buffer.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted input. Always resets the cursor.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
        self.cursor = None;
    }

    /// Cancel navigation (the user typed).
    pub fn cancel(&mut self) {
        self.cursor = None;
    }

    /// Up-arrow: step towards older entries, clamping at the oldest.
    ///
    /// Returns the entry the input field should show, or `None` when the
    /// buffer is empty.
    pub fn up(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(idx);
        Some(self.entries[idx].clone())
    }

    /// Down-arrow: step towards newer entries. Walking past the newest entry
    /// ends navigation and asks the caller to clear the input. A no-op when
    /// not navigating.
    pub fn down(&mut self) -> Option<HistoryStep> {
        let idx = self.cursor?;
        if idx + 1 >= self.entries.len() {
            self.cursor = None;
            Some(HistoryStep::ClearInput)
        } else {
            self.cursor = Some(idx + 1);
            Some(HistoryStep::Entry(self.entries[idx + 1].clone()))
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}
