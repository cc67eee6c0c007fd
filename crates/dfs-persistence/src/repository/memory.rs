use chrono::Utc;

use dfs_model::ContestMode;

use super::{LineupDocument, LineupRepository};
use crate::error::Result;
use crate::types::{LineupId, SavedLineup, StoredLineup};

/// In-process repository; nothing touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    document: LineupDocument,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineupRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<StoredLineup>> {
        Ok(self.document.list())
    }

    fn get(&self, id: LineupId, mode: ContestMode) -> Result<StoredLineup> {
        self.document.get(id, mode)
    }

    fn save(&mut self, lineup: SavedLineup) -> Result<StoredLineup> {
        self.document.insert(lineup, Utc::now())
    }

    fn update(&mut self, id: LineupId, lineup: SavedLineup) -> Result<StoredLineup> {
        self.document.update(id, lineup, Utc::now())
    }

    fn delete(&mut self, id: LineupId, mode: ContestMode) -> Result<()> {
        self.document.remove(id, mode).map(|_| ())
    }
}
