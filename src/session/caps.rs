//! Side-effect capabilities injected into the session.
//!
//! The session never touches the browser-equivalents (opening links, saving
//! the downloadable resume) directly; it calls through these traits. Hosts
//! supply the system implementations, tests supply recording fakes.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Opens URLs in the user's default browser.
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Saves generated text resources (the `download` command).
pub trait ResourceSaver {
    /// Returns the path the resource was written to.
    fn save_text(&self, filename: &str, contents: &str) -> io::Result<PathBuf>;
}

/// Shells out to the platform opener, fire-and-forget.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open_url(&self, url: &str) -> io::Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else {
            Command::new("xdg-open")
        };
        command
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

/// Writes resources into the platform download directory.
#[derive(Debug, Clone)]
pub struct DownloadDirSaver {
    dir: PathBuf,
}

impl DownloadDirSaver {
    pub fn new() -> Self {
        let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for DownloadDirSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSaver for DownloadDirSaver {
    fn save_text(&self, filename: &str, contents: &str) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// No-op opener for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOpener;

impl UrlOpener for NullOpener {
    fn open_url(&self, _url: &str) -> io::Result<()> {
        Ok(())
    }
}

/// No-op saver for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSaver;

impl ResourceSaver for NullSaver {
    fn save_text(&self, filename: &str, _contents: &str) -> io::Result<PathBuf> {
        Ok(PathBuf::from(filename))
    }
}
