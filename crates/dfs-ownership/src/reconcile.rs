use serde::Serialize;
use tracing::{debug, info};

use dfs_model::{PlayerRecord, Position, canonical_name};

use crate::alias::{defense_key, with_defense_aliases};
use crate::dictionary::OwnershipDictionary;

/// Players with ownership applied, plus how many found a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub players: Vec<PlayerRecord>,
    pub matched: usize,
}

impl Reconciliation {
    pub fn unmatched(&self) -> usize {
        self.players.len() - self.matched
    }
}

/// Merge a parsed ownership dictionary onto players.
///
/// Defense aliases are derived from `dict` first. A player matches on its
/// canonical name; defenses fall back to `dst-<TEAM>`. Unmatched players keep
/// whatever ownership they already had.
pub fn apply_ownership(players: Vec<PlayerRecord>, dict: &OwnershipDictionary) -> Reconciliation {
    let dict = with_defense_aliases(dict.clone());
    let mut matched = 0usize;

    let players: Vec<PlayerRecord> = players
        .into_iter()
        .map(|mut player| {
            let key = canonical_name(&player.name);
            let value = dict.get(&key).or_else(|| {
                (player.position == Position::Dst)
                    .then(|| dict.get(&defense_key(&player.team)))
                    .flatten()
            });
            match value {
                Some(value) => {
                    player.ownership = Some(value);
                    matched += 1;
                }
                None => debug!(name = %player.name, team = %player.team, "no ownership match"),
            }
            player
        })
        .collect();

    info!(matched, total = players.len(), "applied ownership");
    Reconciliation { players, matched }
}
