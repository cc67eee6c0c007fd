//! Saved lineup storage.

mod document;
mod json;
mod memory;

pub use document::LineupDocument;
pub use json::JsonFileRepository;
pub use memory::MemoryRepository;

use dfs_model::ContestMode;

use crate::error::Result;
use crate::types::{LineupId, SavedLineup, StoredLineup};

/// Storage for saved lineups. Ids are scoped to a contest mode.
pub trait LineupRepository {
    /// Every saved lineup, newest first.
    fn list(&self) -> Result<Vec<StoredLineup>>;

    fn get(&self, id: LineupId, mode: ContestMode) -> Result<StoredLineup>;

    /// Check and store a new lineup, assigning the next id for its mode.
    fn save(&mut self, lineup: SavedLineup) -> Result<StoredLineup>;

    /// Replace an existing lineup of the same contest mode.
    fn update(&mut self, id: LineupId, lineup: SavedLineup) -> Result<StoredLineup>;

    fn delete(&mut self, id: LineupId, mode: ContestMode) -> Result<()>;
}
