//! Salary accounting.

use dfs_model::{LineupState, SlotEntry};
use dfs_standards::{SALARY_CAP, captain_cost};

/// Cost of an occupied slot: salary, or the rounded 1.5x for the captain.
pub fn slot_cost(entry: &SlotEntry) -> i64 {
    if entry.is_captain {
        captain_cost(entry.player.salary)
    } else {
        i64::from(entry.player.salary)
    }
}

/// Sum of slot costs across the lineup.
pub fn salary_used(state: &LineupState) -> i64 {
    state.occupied().map(|(_, entry)| slot_cost(entry)).sum()
}

/// Cap space left. Negative when the lineup is already over the cap.
pub fn remaining_salary(state: &LineupState) -> i64 {
    SALARY_CAP - salary_used(state)
}

/// Cap space left per open slot, rounded down. `None` once every slot is filled.
pub fn remaining_per_slot(state: &LineupState) -> Option<i64> {
    let open = state.len() - state.filled_count();
    let open = i64::try_from(open).ok().filter(|open| *open > 0)?;
    Some(remaining_salary(state).div_euclid(open))
}
