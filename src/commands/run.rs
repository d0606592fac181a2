//! Default command: run the interactive terminal.

use std::path::PathBuf;

use anyhow::Result;

use folioterm::config::Config;
use folioterm::session::{DownloadDirSaver, PlaceholderAnimator, Session, SystemUrlOpener};
use folioterm::store::{JsonFileStore, MemoryStore, TranscriptStore};
use folioterm::tui::TerminalApp;

pub fn handle(store_path: Option<PathBuf>, fresh: bool, no_animation: bool) -> Result<()> {
    let config = Config::load()?;

    let store: Box<dyn TranscriptStore> = if fresh {
        Box::new(MemoryStore::new())
    } else {
        Box::new(store_path.map(JsonFileStore::at).unwrap_or_default())
    };

    let session = Session::new(
        config.profile,
        config.terminal.clear_behavior,
        Box::new(SystemUrlOpener),
        Box::new(DownloadDirSaver::new()),
        Some(store),
    );

    let animator = if no_animation || !config.terminal.animation {
        PlaceholderAnimator::disabled()
    } else {
        PlaceholderAnimator::new(session.registry())
    };

    TerminalApp::new(session, animator).run()
}
