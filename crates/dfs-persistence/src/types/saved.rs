//! The lineup document a user saves.

use serde::{Deserialize, Deserializer, Serialize};

use dfs_lineup::salary_used;
use dfs_model::{ContestMode, LineupState, PlayerRecord, SlotEntry};
use dfs_standards::{SALARY_CAP, template_for};

use crate::error::{PersistenceError, Result};

const UNTITLED: &str = "Untitled";

/// A saved lineup.
///
/// Older documents carry only `players`; current ones also carry `slots`
/// with explicit captaincy. Both shapes load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLineup {
    pub title: String,
    pub contest_mode: ContestMode,
    pub total_salary: i64,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_slots"
    )]
    pub slots: Option<Vec<Option<SlotEntry>>>,
}

/// Slot as written on disk, where the player may be null or absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSlot {
    #[serde(default)]
    player: Option<PlayerRecord>,
    #[serde(default)]
    is_captain: bool,
}

/// Slots without a player read as open.
fn deserialize_slots<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Option<SlotEntry>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let slots: Option<Vec<Option<StoredSlot>>> = Option::deserialize(deserializer)?;
    Ok(slots.map(|slots| {
        slots
            .into_iter()
            .map(|slot| {
                let slot = slot?;
                Some(SlotEntry {
                    player: slot.player?,
                    is_captain: slot.is_captain,
                })
            })
            .collect()
    }))
}

impl SavedLineup {
    /// Snapshot a lineup for saving. A blank title becomes `Untitled`.
    pub fn from_lineup(title: &str, state: &LineupState, mode: ContestMode) -> Self {
        let title = title.trim();
        Self {
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            },
            contest_mode: mode,
            total_salary: salary_used(state),
            players: state.players().cloned().collect(),
            slots: Some(state.slots().to_vec()),
        }
    }

    /// Rebuild the lineup state, sized to the document's template.
    ///
    /// Current documents copy slot occupancy by index. Legacy documents fill
    /// slots in template order from `players`; in showdown the first player
    /// becomes the captain.
    pub fn to_lineup_state(&self) -> LineupState {
        let len = template_for(self.contest_mode).len();
        let slots: Vec<Option<SlotEntry>> = match &self.slots {
            Some(saved) => (0..len)
                .map(|idx| saved.get(idx).cloned().flatten())
                .collect(),
            None => (0..len)
                .map(|idx| {
                    self.players.get(idx).map(|player| SlotEntry {
                        player: player.clone(),
                        is_captain: self.contest_mode.is_showdown() && idx == 0,
                    })
                })
                .collect(),
        };
        LineupState::from_slots(slots)
    }

    /// Sum of `players` ownership, counting missing values as zero.
    pub fn ownership_sum(&self) -> f64 {
        self.players
            .iter()
            .map(|player| player.ownership.unwrap_or(0.0))
            .sum()
    }

    /// Checks applied before a document is stored.
    pub fn check_request(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(invalid("title must not be blank"));
        }
        if !(0..=SALARY_CAP).contains(&self.total_salary) {
            return Err(invalid(format!(
                "totalSalary must be between 0 and {SALARY_CAP}"
            )));
        }

        let expected = template_for(self.contest_mode).len();
        let slots = self
            .slots
            .as_ref()
            .ok_or_else(|| invalid("slots is required"))?;
        if slots.len() < expected {
            return Err(invalid(format!(
                "slots must contain at least {expected} slot entries"
            )));
        }
        for (idx, slot) in slots.iter().take(expected).enumerate() {
            let named = slot
                .as_ref()
                .is_some_and(|entry| !entry.player.name.trim().is_empty());
            if !named {
                return Err(invalid(format!("slots[{idx}].player.name is required")));
            }
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> PersistenceError {
    PersistenceError::InvalidRequest(reason.into())
}
