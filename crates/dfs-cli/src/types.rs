use dfs_cli::pipeline::{Assembly, EditOutcome, PlayerPool};
use dfs_model::{ContestMode, PlayerRecord};
use dfs_persistence::StoredLineup;

/// Player pool plus the rows that passed the filter.
#[derive(Debug)]
pub struct PlayerListing {
    pub mode: ContestMode,
    pub pool: PlayerPool,
    pub shown: Vec<PlayerRecord>,
}

#[derive(Debug)]
pub struct BuildReport {
    pub pool: PlayerPool,
    pub assembly: Assembly,
    pub save_requested: bool,
    /// Set when the lineup was valid and `--save` was given.
    pub saved: Option<StoredLineup>,
}

#[derive(Debug)]
pub struct EditReport {
    /// Absent when the edit only dropped slots or retitled.
    pub pool: Option<PlayerPool>,
    pub outcome: EditOutcome,
}
