use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dfs_model::ContestMode;

use crate::error::{PersistenceError, Result};
use crate::types::{LineupId, SavedLineup, StoredLineup};

/// Every saved lineup plus the id counters, as one serializable document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupDocument {
    #[serde(default)]
    last_classic_id: LineupId,
    #[serde(default)]
    last_showdown_id: LineupId,
    #[serde(default)]
    lineups: Vec<StoredLineup>,
}

impl LineupDocument {
    pub fn len(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }

    pub fn list(&self) -> Vec<StoredLineup> {
        let mut out = self.lineups.clone();
        out.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        out
    }

    pub fn get(&self, id: LineupId, mode: ContestMode) -> Result<StoredLineup> {
        self.position(id, mode)
            .map(|idx| self.lineups[idx].clone())
            .ok_or(PersistenceError::NotFound { id, mode })
    }

    pub fn insert(&mut self, lineup: SavedLineup, now: DateTime<Utc>) -> Result<StoredLineup> {
        lineup.check_request()?;
        let counter = match lineup.contest_mode {
            ContestMode::Classic => &mut self.last_classic_id,
            ContestMode::Showdown => &mut self.last_showdown_id,
        };
        *counter += 1;
        let stored = StoredLineup::new(*counter, lineup, now);
        self.lineups.push(stored.clone());
        Ok(stored)
    }

    pub fn update(
        &mut self,
        id: LineupId,
        lineup: SavedLineup,
        now: DateTime<Utc>,
    ) -> Result<StoredLineup> {
        let mode = lineup.contest_mode;
        let idx = self
            .position(id, mode)
            .ok_or(PersistenceError::NotFound { id, mode })?;
        lineup.check_request()?;
        let stored = &mut self.lineups[idx];
        stored.replace(lineup, now);
        Ok(stored.clone())
    }

    pub fn remove(&mut self, id: LineupId, mode: ContestMode) -> Result<StoredLineup> {
        let idx = self
            .position(id, mode)
            .ok_or(PersistenceError::NotFound { id, mode })?;
        Ok(self.lineups.remove(idx))
    }

    fn position(&self, id: LineupId, mode: ContestMode) -> Option<usize> {
        self.lineups
            .iter()
            .position(|stored| stored.id == id && stored.mode() == mode)
    }
}
