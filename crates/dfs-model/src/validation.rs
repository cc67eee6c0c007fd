use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::player::Position;

/// Outcome of checking a lineup against its contest rules.
///
/// Recomputed on demand and never persisted. `position_counts` is only
/// populated for classic lineups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<String>,
    pub total_salary: i64,
    pub position_counts: BTreeMap<Position, usize>,
}

impl ValidationResult {
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn count_for(&self, position: &Position) -> usize {
        self.position_counts.get(position).copied().unwrap_or(0)
    }
}
