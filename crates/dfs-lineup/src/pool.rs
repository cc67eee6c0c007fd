//! Player pool browsing: filter, exclude, sort, truncate.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use dfs_model::{ContestMode, LineupState, PlayerRecord, Position};

/// Rows shown when no explicit limit is configured.
pub const DEFAULT_PLAYER_LIMIT: usize = 400;

/// Position tab of the player table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionFilter {
    #[default]
    All,
    Qb,
    Rb,
    Wr,
    Te,
    /// RB, WR, or TE.
    Flex,
    Dst,
}

impl PositionFilter {
    pub fn matches(&self, position: &Position) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Qb => *position == Position::Qb,
            PositionFilter::Rb => *position == Position::Rb,
            PositionFilter::Wr => *position == Position::Wr,
            PositionFilter::Te => *position == Position::Te,
            PositionFilter::Flex => position.is_flex_eligible(),
            PositionFilter::Dst => *position == Position::Dst,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFilter {
    pub position: PositionFilter,
    pub search: String,
    pub limit: usize,
}

impl Default for PlayerFilter {
    fn default() -> Self {
        Self {
            position: PositionFilter::All,
            search: String::new(),
            limit: DEFAULT_PLAYER_LIMIT,
        }
    }
}

/// Players available to add to the lineup.
///
/// The position filter only applies to classic contests. Search is a
/// case-insensitive substring match on name or team. Results are sorted by
/// salary (highest first), then name.
pub fn filter_players(
    players: &[PlayerRecord],
    state: &LineupState,
    mode: ContestMode,
    filter: &PlayerFilter,
) -> Vec<PlayerRecord> {
    let query = filter.search.trim().to_lowercase();
    let mut out: Vec<PlayerRecord> = players
        .iter()
        .filter(|player| mode.is_showdown() || filter.position.matches(&player.position))
        .filter(|player| {
            query.is_empty()
                || player.name.to_lowercase().contains(&query)
                || player.team.to_lowercase().contains(&query)
        })
        .filter(|player| !state.contains_key(&player.key()))
        .cloned()
        .collect();

    out.sort_by(|a, b| match b.salary.cmp(&a.salary) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
    out.truncate(filter.limit);
    out
}

/// Summed ownership of the lineup; players without a value count as zero.
pub fn lineup_ownership(state: &LineupState) -> f64 {
    state
        .players()
        .map(|player| player.ownership.unwrap_or(0.0))
        .sum()
}
