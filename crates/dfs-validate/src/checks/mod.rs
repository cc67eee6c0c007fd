//! Individual lineup checks, run in message order by `validate_lineup`.

pub mod roster;
pub mod salary;
pub mod showdown;

use dfs_model::{LineupState, SlotEntry, SlotSpec, SlotTemplate};

/// Template slots zipped with their entries; slots the state lacks read as empty.
pub(crate) fn template_slots<'a>(
    template: &'a SlotTemplate,
    state: &'a LineupState,
) -> impl Iterator<Item = (&'a SlotSpec, Option<&'a SlotEntry>)> + 'a {
    template
        .iter()
        .enumerate()
        .map(move |(idx, slot)| (slot, state.get(idx)))
}

/// True when any template slot is empty in the state.
pub(crate) fn has_open_slot(template: &SlotTemplate, state: &LineupState) -> bool {
    template_slots(template, state).any(|(_, entry)| entry.is_none())
}
