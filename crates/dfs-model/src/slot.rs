//! Slot templates describing a contest format's roster.

use serde::Serialize;

use crate::player::Position;

/// Which positions a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accepts {
    Any,
    Positions(&'static [Position]),
}

impl Accepts {
    pub fn accepts(&self, position: &Position) -> bool {
        match self {
            Accepts::Any => true,
            Accepts::Positions(allowed) => allowed.contains(position),
        }
    }
}

/// Role of a slot in its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotKind {
    /// Fixed-position slot (classic QB, RB1, ...).
    Dedicated,
    /// Multi-position slot (classic FLEX, showdown FLEX1..5).
    Flex,
    /// Showdown captain; its occupant costs 1.5x salary.
    Captain,
}

/// One slot of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: SlotKind,
    pub accepts: Accepts,
}

impl SlotSpec {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        kind: SlotKind,
        accepts: Accepts,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            accepts,
        }
    }
}

/// Ordered, fixed sequence of slots for a contest format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotTemplate {
    pub slots: &'static [SlotSpec],
}

impl SlotTemplate {
    pub const fn new(slots: &'static [SlotSpec]) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlotSpec> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotSpec> {
        self.slots.iter()
    }

    /// Index of the first slot of the given kind.
    pub fn position_of(&self, kind: SlotKind) -> Option<usize> {
        self.slots.iter().position(|slot| slot.kind == kind)
    }

    /// Indices of every slot of the given kind, in template order.
    pub fn indices_of(&self, kind: SlotKind) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, slot)| slot.kind == kind)
            .map(|(idx, _)| idx)
    }
}
