//! Last parsed player pool, kept between runs so lineups can be built
//! without re-reading the salary file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use dfs_model::PlayerRecord;

use crate::error::Result;
use crate::io::{read_json, remove_file, verify_file_hash, write_json_atomic};

const WHAT: &str = "player cache";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCache {
    pub players: Vec<PlayerRecord>,
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    /// SHA-256 of the salary file the players came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl PlayerCache {
    pub fn new(players: Vec<PlayerRecord>, file_name: impl Into<String>) -> Self {
        Self {
            players,
            file_name: file_name.into(),
            timestamp: Utc::now(),
            source_hash: None,
        }
    }

    #[must_use]
    pub fn with_source_hash(mut self, hash: impl Into<String>) -> Self {
        self.source_hash = Some(hash.into());
        self
    }

    pub fn metadata(&self) -> PlayerCacheMetadata {
        PlayerCacheMetadata {
            file_name: self.file_name.clone(),
            timestamp: self.timestamp,
            player_count: self.players.len(),
        }
    }

    /// Whether `path` still has the contents the cache was built from.
    /// Caches without a recorded hash never match.
    pub fn matches_source(&self, path: &Path) -> Result<bool> {
        match &self.source_hash {
            Some(hash) => verify_file_hash(path, hash),
            None => Ok(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCacheMetadata {
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    pub player_count: usize,
}

pub trait PlayerCacheStore {
    fn store(&self, cache: &PlayerCache) -> Result<()>;

    fn load(&self) -> Result<Option<PlayerCache>>;

    fn metadata(&self) -> Result<Option<PlayerCacheMetadata>> {
        Ok(self.load()?.map(|cache| cache.metadata()))
    }

    /// Remove the cache. Returns whether anything was removed.
    fn clear(&self) -> Result<bool>;
}

/// Player cache stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonPlayerCache {
    path: PathBuf,
}

impl JsonPlayerCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlayerCacheStore for JsonPlayerCache {
    fn store(&self, cache: &PlayerCache) -> Result<()> {
        write_json_atomic(cache, &self.path, WHAT)?;
        info!(
            players = cache.players.len(),
            file = %cache.file_name,
            path = %self.path.display(),
            "cached player pool"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<PlayerCache>> {
        read_json(&self.path, WHAT)
    }

    fn clear(&self) -> Result<bool> {
        let removed = remove_file(&self.path)?;
        if removed {
            info!(path = %self.path.display(), "cleared player cache");
        }
        Ok(removed)
    }
}
