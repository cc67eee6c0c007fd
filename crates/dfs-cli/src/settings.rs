//! User settings read from a TOML file.
//!
//! Every section and field has a default, so a partial file, a missing file
//! and an unreadable file all load.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use dfs_lineup::DEFAULT_PLAYER_LIMIT;
use dfs_model::ContestMode;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dfs.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub players: PlayerSettings,
    pub contest: ContestSettings,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                debug!(path = %path.display(), %error, "no settings file, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path or from [`DEFAULT_CONFIG_FILE`].
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Save settings, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write settings to {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// JSON document holding saved lineups.
    pub lineups_path: PathBuf,
    /// JSON file holding the last parsed player pool.
    pub players_cache_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            lineups_path: PathBuf::from(".dfs/lineups.json"),
            players_cache_path: PathBuf::from(".dfs/players.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Rows shown by the player list.
    pub limit: usize,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PLAYER_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestSettings {
    /// Mode used when neither a flag nor the salary feed selects one.
    pub default_mode: ContestMode,
}
