//! Eligibility checks and slot assignment.

use thiserror::Error;
use tracing::debug;

use dfs_model::{
    ContestMode, LineupState, ModelError, PlacementIntent, PlayerRecord, SlotEntry, SlotKind,
    SlotTemplate,
};
use dfs_standards::{captain_cost, template_for};

use crate::cost::remaining_salary;

/// Why a player could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementRejection {
    #[error("{player} is already in the lineup")]
    AlreadyInLineup { player: String },
    #[error("no open slot accepts {player}")]
    NoEligibleSlot { player: String },
    #[error("{player} costs {cost} but only {remaining} remains under the cap")]
    OverSalaryCap {
        player: String,
        cost: i64,
        remaining: i64,
    },
}

/// A candidate slot and what the player would cost there.
struct Candidate {
    index: usize,
    cost: i64,
    captain: bool,
}

fn first_open(
    template: &SlotTemplate,
    state: &LineupState,
    kind: SlotKind,
    player: &PlayerRecord,
) -> Option<usize> {
    template
        .iter()
        .enumerate()
        .find(|(idx, slot)| {
            slot.kind == kind && slot.accepts.accepts(&player.position) && state.is_open(*idx)
        })
        .map(|(idx, _)| idx)
}

/// Check a candidate against the remaining cap.
fn affordable(
    candidate: Option<Candidate>,
    player: &PlayerRecord,
    remaining: i64,
) -> Result<Candidate, PlacementRejection> {
    let candidate = candidate.ok_or_else(|| PlacementRejection::NoEligibleSlot {
        player: player.name.clone(),
    })?;
    if candidate.cost > remaining {
        return Err(PlacementRejection::OverSalaryCap {
            player: player.name.clone(),
            cost: candidate.cost,
            remaining,
        });
    }
    Ok(candidate)
}

fn classic_candidate(
    template: &SlotTemplate,
    state: &LineupState,
    player: &PlayerRecord,
) -> Option<Candidate> {
    first_open(template, state, SlotKind::Dedicated, player)
        .or_else(|| first_open(template, state, SlotKind::Flex, player))
        .map(|index| Candidate {
            index,
            cost: i64::from(player.salary),
            captain: false,
        })
}

fn showdown_flex(
    template: &SlotTemplate,
    state: &LineupState,
    player: &PlayerRecord,
) -> Option<Candidate> {
    first_open(template, state, SlotKind::Flex, player).map(|index| Candidate {
        index,
        cost: i64::from(player.salary),
        captain: false,
    })
}

fn showdown_captain(
    template: &SlotTemplate,
    state: &LineupState,
    player: &PlayerRecord,
) -> Option<Candidate> {
    first_open(template, state, SlotKind::Captain, player).map(|index| Candidate {
        index,
        cost: captain_cost(player.salary),
        captain: true,
    })
}

fn choose_slot(
    player: &PlayerRecord,
    state: &LineupState,
    mode: ContestMode,
    intent: PlacementIntent,
) -> Result<Candidate, PlacementRejection> {
    if state.contains_key(&player.key()) {
        return Err(PlacementRejection::AlreadyInLineup {
            player: player.name.clone(),
        });
    }

    let template = template_for(mode);
    let remaining = remaining_salary(state);

    match (mode, intent) {
        (ContestMode::Classic, _) => {
            affordable(classic_candidate(template, state, player), player, remaining)
        }
        (ContestMode::Showdown, PlacementIntent::Captain) => {
            affordable(showdown_captain(template, state, player), player, remaining)
        }
        (ContestMode::Showdown, PlacementIntent::Flex) => {
            affordable(showdown_flex(template, state, player), player, remaining)
        }
        (ContestMode::Showdown, PlacementIntent::Auto) => {
            match affordable(showdown_flex(template, state, player), player, remaining) {
                Ok(candidate) => Ok(candidate),
                Err(flex_err) => {
                    affordable(showdown_captain(template, state, player), player, remaining)
                        .map_err(|captain_err| match flex_err {
                            PlacementRejection::OverSalaryCap { .. } => flex_err,
                            _ => captain_err,
                        })
                }
            }
        }
    }
}

/// Place a player, or explain why not.
///
/// On success returns the new lineup and the index that was filled.
/// Classic contests ignore `intent`. Showdown `Auto` tries the flex slots
/// before the captain slot.
pub fn try_place(
    player: &PlayerRecord,
    state: &LineupState,
    mode: ContestMode,
    intent: PlacementIntent,
) -> Result<(LineupState, usize), PlacementRejection> {
    let candidate = choose_slot(player, state, mode, intent)?;
    let entry = if candidate.captain {
        SlotEntry::captain(player.clone())
    } else {
        SlotEntry::new(player.clone())
    };
    let mut slots = state.slots().to_vec();
    slots[candidate.index] = Some(entry);
    debug!(
        player = %player.name,
        slot = candidate.index,
        cost = candidate.cost,
        "placed player"
    );
    Ok((LineupState::from_slots(slots), candidate.index))
}

/// Whether [`place`] would change the lineup.
pub fn can_place(
    player: &PlayerRecord,
    state: &LineupState,
    mode: ContestMode,
    intent: PlacementIntent,
) -> bool {
    choose_slot(player, state, mode, intent).is_ok()
}

/// Place a player; an ineligible placement returns the lineup unchanged.
pub fn place(
    player: &PlayerRecord,
    state: &LineupState,
    mode: ContestMode,
    intent: PlacementIntent,
) -> LineupState {
    match try_place(player, state, mode, intent) {
        Ok((next, _)) => next,
        Err(reason) => {
            debug!(%reason, "placement rejected");
            state.clone()
        }
    }
}

/// Clear one slot, leaving every other slot as it was.
pub fn remove_slot(index: usize, state: &LineupState) -> Result<LineupState, ModelError> {
    state.with_slot(index, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfs_model::Position;
    use dfs_standards::empty_lineup;

    fn player(name: &str, position: Position, team: &str, salary: u32) -> PlayerRecord {
        PlayerRecord::new(name, position, team, salary)
    }

    #[test]
    fn classic_prefers_dedicated_then_flex() {
        let mode = ContestMode::Classic;
        let mut state = empty_lineup(mode);
        for (name, salary) in [("A", 5000), ("B", 5000), ("C", 5000)] {
            let next = player(name, Position::Rb, "KC", salary);
            state = place(&next, &state, mode, PlacementIntent::Auto);
        }
        assert_eq!(state.get(1).unwrap().player.name, "A");
        assert_eq!(state.get(2).unwrap().player.name, "B");
        assert_eq!(state.get(7).unwrap().player.name, "C");
        let fourth = player("D", Position::Rb, "KC", 3000);
        assert_eq!(
            try_place(&fourth, &state, mode, PlacementIntent::Auto).unwrap_err(),
            PlacementRejection::NoEligibleSlot {
                player: "D".to_string()
            }
        );
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mode = ContestMode::Classic;
        let evans = player("Mike Evans", Position::Wr, "TB", 7000);
        let state = place(&evans, &empty_lineup(mode), mode, PlacementIntent::Auto);
        let again = player("Mike Evans Jr.", Position::Wr, "tb", 6800);
        assert!(matches!(
            try_place(&again, &state, mode, PlacementIntent::Auto),
            Err(PlacementRejection::AlreadyInLineup { .. })
        ));
        assert_eq!(place(&again, &state, mode, PlacementIntent::Auto), state);
    }

    #[test]
    fn showdown_auto_fills_flex_before_captain() {
        let mode = ContestMode::Showdown;
        let mut state = empty_lineup(mode);
        for idx in 0..6 {
            let next = player(&format!("P{idx}"), Position::Wr, "DAL", 5000);
            state = place(&next, &state, mode, PlacementIntent::Auto);
        }
        assert_eq!(state.get(0).unwrap().player.name, "P5");
        assert!(state.get(0).unwrap().is_captain);
        assert!(state.occupied().skip(1).all(|(_, entry)| !entry.is_captain));
    }

    #[test]
    fn showdown_explicit_captain_uses_multiplied_cost() {
        let mode = ContestMode::Showdown;
        let star = player("CeeDee Lamb", Position::Wr, "DAL", 10_000);
        let (state, index) =
            try_place(&star, &empty_lineup(mode), mode, PlacementIntent::Captain).unwrap();
        assert_eq!(index, 0);
        assert!(state.get(0).unwrap().is_captain);

        let other = player("Jalen Hurts", Position::Qb, "PHI", 11_000);
        assert!(!can_place(&other, &state, mode, PlacementIntent::Captain));
        assert!(can_place(&other, &state, mode, PlacementIntent::Flex));
    }

    #[test]
    fn auto_reports_cap_over_missing_captain() {
        let mode = ContestMode::Showdown;
        let mut state = empty_lineup(mode);
        for idx in 0..4 {
            let filler = player(&format!("F{idx}"), Position::Rb, "NYG", 11_000);
            state = place(&filler, &state, mode, PlacementIntent::Flex);
        }
        let pricey = player("Saquon Barkley", Position::Rb, "PHI", 7000);
        assert_eq!(
            try_place(&pricey, &state, mode, PlacementIntent::Auto).unwrap_err(),
            PlacementRejection::OverSalaryCap {
                player: "Saquon Barkley".to_string(),
                cost: 7000,
                remaining: 6000,
            }
        );
    }

    #[test]
    fn remove_slot_out_of_range_is_an_error() {
        let state = empty_lineup(ContestMode::Classic);
        assert_eq!(
            remove_slot(9, &state).unwrap_err(),
            ModelError::SlotIndexOutOfRange { index: 9, len: 9 }
        );
    }
}
