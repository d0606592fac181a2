//! Terminal session core.
//!
//! [`Session`] owns the transcript, the command registry, and the input
//! history, and performs all command dispatch. It knows nothing about
//! rendering: hosts subscribe to transcript changes through an observer (or
//! poll the revision counter) and draw however they like. Side effects go
//! through the capability traits in [`caps`], persistence through an optional
//! [`TranscriptStore`]; both are best-effort and never surface failures to
//! the user.

mod animator;
mod caps;
mod entry;
mod history;
mod registry;

pub use animator::{
    Phase, PlaceholderAnimator, FULL_TEXT_PAUSE, INITIAL_DELAY, STEP_INTERVAL,
};
pub use caps::{
    DownloadDirSaver, NullOpener, NullSaver, ResourceSaver, SystemUrlOpener, UrlOpener,
};
pub use entry::LogEntry;
pub use history::{History, HistoryStep};
pub use registry::{Command, CommandRegistry, CommandSpec};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::TranscriptStore;

/// Prompt marker reproduced at the front of echo lines.
pub const PROMPT: &str = "# ";

/// Echo text for an empty submission: a single NBSP, so the line serializes
/// and re-renders as a blank prompt line without special-casing the renderer.
pub const BLANK_ECHO: &str = "\u{a0}";

/// Welcome line shown on first run and after a failed transcript load.
pub const WELCOME: &str = "Welcome to Kisetsu's terminal. Type \"help\" to get started.";

/// Filename of the synthesized resume download.
pub const RESUME_FILENAME: &str = "resume.txt";

const ABOUT_LINES: &[&str] = &[
    "Dharshik, aka Kisetsu. Indie game developer and systems programmer.",
    "Self-taught; I build raw, fast tools and games from the ground up.",
    "Shipped over perfect. No framework worship, no drag-drop magic.",
];

const RESUME_TEXT: &str = "\
Dharshik (Kisetsu)
Indie Game Developer / Systems Programmer

Projects:
  - Buried Alive: psychological horror FPS set in an underground facility
  - Override: third-person shooter where the player is a rogue AI
  - ProtonDB: modular embedded NoSQL database engine in C and C#

Tools: C#, Unity, C, MongoDB, Neovim, Blender, Git, Azure, Python

GitHub: https://github.com/Kisetsu15
";

const DOWNLOAD_CONFIRMATION: &str = "Saved resume.txt to your downloads folder.";

/// What `clear` leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearBehavior {
    /// `clear` empties the transcript completely
    Empty,
    /// `clear` resets the transcript to the single welcome line
    #[default]
    Welcome,
}

/// Fixed profile content the built-ins print and link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub github_url: String,
    pub resume_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Kisetsu".into(),
            github_url: "https://github.com/Kisetsu15".into(),
            resume_url: "https://kisetsu15.github.io/resume".into(),
        }
    }
}

type Observer = Box<dyn FnMut(&[LogEntry])>;

/// A terminal session: transcript, registry, history, injected capabilities.
pub struct Session {
    registry: CommandRegistry,
    transcript: Vec<LogEntry>,
    history: History,
    profile: Profile,
    clear_behavior: ClearBehavior,
    opener: Box<dyn UrlOpener>,
    saver: Box<dyn ResourceSaver>,
    store: Option<Box<dyn TranscriptStore>>,
    observer: Option<Observer>,
    revision: u64,
}

impl Session {
    /// Create a session, loading the transcript from `store` when present.
    ///
    /// A missing or malformed stored transcript falls back to the single
    /// welcome line; the failure is logged and never surfaced.
    pub fn new(
        profile: Profile,
        clear_behavior: ClearBehavior,
        opener: Box<dyn UrlOpener>,
        saver: Box<dyn ResourceSaver>,
        store: Option<Box<dyn TranscriptStore>>,
    ) -> Self {
        let transcript = match store.as_ref().map(|s| s.load()) {
            Some(Ok(entries)) if !entries.is_empty() => entries,
            Some(Err(err)) => {
                debug!(error = %err, "transcript load failed, starting fresh");
                vec![LogEntry::output(WELCOME)]
            }
            _ => vec![LogEntry::output(WELCOME)],
        };

        Self {
            registry: CommandRegistry::new(),
            transcript,
            history: History::new(),
            profile,
            clear_behavior,
            opener,
            saver,
            store,
            observer: None,
            revision: 0,
        }
    }

    /// A session with no side effects and no persistence. Used by tests and
    /// headless tooling.
    pub fn detached() -> Self {
        Self::new(
            Profile::default(),
            ClearBehavior::default(),
            Box::new(NullOpener),
            Box::new(NullSaver),
            None,
        )
    }

    pub fn transcript(&self) -> &[LogEntry] {
        &self.transcript
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Bumped on every transcript mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Subscribe to transcript changes. Called after every mutation with the
    /// full transcript.
    pub fn set_observer(&mut self, observer: impl FnMut(&[LogEntry]) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Submit a line of input.
    ///
    /// Empty input (after trimming) appends one invisible echo line and does
    /// not touch the history. Anything else is recorded in the history,
    /// echoed with the prompt marker, and dispatched on its first token.
    pub fn submit(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            // Submitting counts as leaving history browsing, even when
            // nothing gets recorded
            self.history.cancel();
            self.transcript.push(LogEntry::echo(BLANK_ECHO));
            self.after_mutation();
            return;
        }

        self.history.push(trimmed.to_string());
        self.transcript
            .push(LogEntry::echo(format!("{PROMPT}{trimmed} ")));

        let mut tokens = trimmed.split_whitespace();
        let head = tokens.next().unwrap_or_default();
        match self.registry.lookup(head) {
            Some(Command::Help) => {
                for line in self.registry.help_lines() {
                    self.transcript.push(LogEntry::output(line));
                }
            }
            Some(Command::About) => {
                for line in ABOUT_LINES {
                    self.transcript.push(LogEntry::output(*line));
                }
            }
            Some(Command::Clear) => {
                self.transcript = match self.clear_behavior {
                    ClearBehavior::Empty => Vec::new(),
                    ClearBehavior::Welcome => vec![LogEntry::output(WELCOME)],
                };
            }
            Some(Command::Date) => {
                let now = chrono::Local::now();
                self.transcript
                    .push(LogEntry::output(now.format("%a %b %e %H:%M:%S %Y").to_string()));
            }
            Some(Command::Echo) => {
                let rest: Vec<&str> = tokens.collect();
                self.transcript.push(LogEntry::output(rest.join(" ")));
            }
            Some(Command::Github) => {
                self.transcript
                    .push(LogEntry::output("Opening GitHub profile in your browser..."));
                let url = self.profile.github_url.clone();
                self.open_url(&url);
            }
            Some(Command::Resume) => {
                self.transcript
                    .push(LogEntry::output("Opening resume in your browser..."));
                let url = self.profile.resume_url.clone();
                self.open_url(&url);
            }
            Some(Command::Download) => {
                match self.saver.save_text(RESUME_FILENAME, RESUME_TEXT) {
                    Ok(path) => debug!(path = %path.display(), "resume saved"),
                    Err(err) => debug!(error = %err, "resume save failed"),
                }
                self.transcript.push(LogEntry::output(DOWNLOAD_CONFIRMATION));
            }
            None => {
                self.transcript.push(LogEntry::output(format!(
                    "Command not found: {head}. Type \"help\"."
                )));
            }
        }

        self.after_mutation();
    }

    /// Up-arrow history navigation. Returns the text the input field should
    /// show, if any.
    pub fn history_up(&mut self) -> Option<String> {
        self.history.up()
    }

    /// Down-arrow history navigation.
    pub fn history_down(&mut self) -> Option<HistoryStep> {
        self.history.down()
    }

    /// The user edited the input: cancel any in-progress history browsing.
    pub fn cancel_history(&mut self) {
        self.history.cancel();
    }

    fn open_url(&mut self, url: &str) {
        if let Err(err) = self.opener.open_url(url) {
            debug!(url, error = %err, "failed to open url");
        }
    }

    fn after_mutation(&mut self) {
        self.revision += 1;
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.transcript) {
                debug!(error = %err, "transcript save failed");
            }
        }
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.transcript);
        }
    }
}
