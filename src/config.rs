//! User configuration.
//!
//! Loaded from `<config-dir>/folioterm/config.toml`. Every field has a
//! default matching the original site content, so a missing file just works.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::{ClearBehavior, Profile};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: Profile,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// What `clear` leaves behind (`"empty"` or `"welcome"`)
    pub clear_behavior: ClearBehavior,
    /// Placeholder typing animation on startup
    pub animation: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            clear_behavior: ClearBehavior::default(),
            animation: true,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("folioterm").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
