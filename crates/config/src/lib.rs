//! Configuration loading for the stroke tools
//!
//! Resolves the shared config directory (~/.config/strokes/ by default),
//! reads the optional `settings.json` inside it and exposes the paths the
//! action database persists to.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Name of the application directory under the platform config dir
const APP_DIR: &str = "strokes";

/// Optional settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// File holding the serialized action database
pub const ACTIONS_FILE: &str = "actions";

/// Default delay between a change and the write that persists it
pub const DEFAULT_SAVE_DELAY_MS: u64 = 5000;

/// Get the default config directory (~/.config/strokes/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Values read from `settings.json`; every field is optional on disk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct SettingsFile {
    verbosity: u8,
    save_delay_ms: u64,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            verbosity: 0,
            save_delay_ms: DEFAULT_SAVE_DELAY_MS,
        }
    }
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the actions file and settings
    pub config_dir: PathBuf,
    /// Diagnostic verbosity (0 = quiet, 1 = actions, 2 = load/save details)
    pub verbosity: u8,
    /// Debounce delay for saving the action database
    pub save_delay_ms: u64,
}

impl Settings {
    /// Load settings from the given directory, or the default one.
    ///
    /// A missing `settings.json` yields defaults; a malformed one is an error.
    pub fn load(dir_override: Option<PathBuf>) -> Result<Self> {
        let config_dir = match dir_override {
            Some(dir) => dir,
            None => config_dir().context("Could not determine config directory")?,
        };

        let path = config_dir.join(SETTINGS_FILE);
        let file: SettingsFile = if path.exists() {
            load_json_file(&path)?
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            config_dir,
            verbosity: file.verbosity,
            save_delay_ms: file.save_delay_ms,
        })
    }

    /// Path of the action database file
    pub fn actions_path(&self) -> PathBuf {
        self.config_dir.join(ACTIONS_FILE)
    }

    /// Ensure the config directory exists
    pub fn ensure_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                self.config_dir.display()
            )
        })?;
        Ok(&self.config_dir)
    }
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
