use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use dfs_model::ContestMode;

use super::{LineupDocument, LineupRepository};
use crate::error::Result;
use crate::io::{read_json, write_json_atomic};
use crate::types::{LineupId, SavedLineup, StoredLineup};

const WHAT: &str = "saved lineups";

/// Repository backed by a single JSON file.
///
/// The file is re-read on every call and rewritten atomically after every
/// change, so separate processes sharing the file see each other's saves.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<LineupDocument> {
        Ok(read_json(&self.path, WHAT)?.unwrap_or_default())
    }

    fn store(&self, document: &LineupDocument) -> Result<()> {
        write_json_atomic(document, &self.path, WHAT)
    }
}

impl LineupRepository for JsonFileRepository {
    fn list(&self) -> Result<Vec<StoredLineup>> {
        Ok(self.load()?.list())
    }

    fn get(&self, id: LineupId, mode: ContestMode) -> Result<StoredLineup> {
        self.load()?.get(id, mode)
    }

    fn save(&mut self, lineup: SavedLineup) -> Result<StoredLineup> {
        let mut document = self.load()?;
        let stored = document.insert(lineup, Utc::now())?;
        self.store(&document)?;
        info!(
            id = stored.id,
            mode = %stored.mode(),
            title = %stored.lineup.title,
            path = %self.path.display(),
            "saved lineup"
        );
        Ok(stored)
    }

    fn update(&mut self, id: LineupId, lineup: SavedLineup) -> Result<StoredLineup> {
        let mut document = self.load()?;
        let stored = document.update(id, lineup, Utc::now())?;
        self.store(&document)?;
        info!(id, mode = %stored.mode(), "updated lineup");
        Ok(stored)
    }

    fn delete(&mut self, id: LineupId, mode: ContestMode) -> Result<()> {
        let mut document = self.load()?;
        document.remove(id, mode)?;
        self.store(&document)?;
        info!(id, mode = %mode, "deleted lineup");
        Ok(())
    }
}
