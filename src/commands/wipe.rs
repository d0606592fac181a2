//! `wipe` subcommand: delete the persisted transcript.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use folioterm::store::JsonFileStore;

pub fn handle(store_path: Option<PathBuf>) -> Result<()> {
    let store = store_path.map(JsonFileStore::at).unwrap_or_default();
    let path = store.path();
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
        println!("Removed {}", path.display());
    } else {
        println!("No saved transcript at {}", path.display());
    }
    Ok(())
}
