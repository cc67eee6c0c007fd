//! Lineup state: one optional entry per template slot.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::player::{PlayerKey, PlayerRecord};

/// An occupied slot.
///
/// Captaincy is carried explicitly; it is never inferred from the slot index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotEntry {
    pub player: PlayerRecord,
    #[serde(default)]
    pub is_captain: bool,
}

impl SlotEntry {
    pub fn new(player: PlayerRecord) -> Self {
        Self {
            player,
            is_captain: false,
        }
    }

    pub fn captain(player: PlayerRecord) -> Self {
        Self {
            player,
            is_captain: true,
        }
    }
}

/// Ordered slots of a lineup, aligned with the active template.
///
/// Values are immutable from the outside: placement operations return a new
/// state and leave the input untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineupState {
    slots: Vec<Option<SlotEntry>>,
}

impl LineupState {
    /// An empty lineup with `len` slots.
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn from_slots(slots: Vec<Option<SlotEntry>>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<SlotEntry>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&SlotEntry> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Occupied slots with their indices.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &SlotEntry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|entry| (idx, entry)))
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.occupied().map(|(_, entry)| &entry.player)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn contains_key(&self, key: &PlayerKey) -> bool {
        self.players().any(|player| &player.key() == key)
    }

    /// A copy of this state with one slot replaced.
    pub fn with_slot(&self, index: usize, entry: Option<SlotEntry>) -> Result<Self> {
        if index >= self.slots.len() {
            return Err(ModelError::SlotIndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        let mut slots = self.slots.clone();
        slots[index] = entry;
        Ok(Self { slots })
    }

    pub fn into_slots(self) -> Vec<Option<SlotEntry>> {
        self.slots
    }
}
