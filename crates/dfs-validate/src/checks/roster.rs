//! Classic roster fill and position minimums.

use std::collections::BTreeMap;

use dfs_model::{LineupState, Position, SlotKind};
use dfs_standards::{CLASSIC_TEMPLATE, required_minimums};

use super::{has_open_slot, template_slots};

/// Position counts over occupied dedicated slots. The FLEX occupant never
/// counts toward a minimum.
pub fn count_positions(state: &LineupState) -> BTreeMap<Position, usize> {
    let mut counts: BTreeMap<Position, usize> = Position::ROSTER
        .iter()
        .map(|position| (position.clone(), 0))
        .collect();
    for (slot, entry) in template_slots(&CLASSIC_TEMPLATE, state) {
        if slot.kind == SlotKind::Flex {
            continue;
        }
        if let Some(entry) = entry {
            *counts.entry(entry.player.position.clone()).or_insert(0) += 1;
        }
    }
    counts
}

pub fn check(state: &LineupState, counts: &BTreeMap<Position, usize>) -> Vec<String> {
    let mut violations = Vec::new();
    if has_open_slot(&CLASSIC_TEMPLATE, state) {
        violations.push(format!(
            "Lineup must have exactly {} players.",
            CLASSIC_TEMPLATE.len()
        ));
    }
    for (position, minimum) in required_minimums() {
        let have = counts.get(&position).copied().unwrap_or(0);
        if have < minimum {
            violations.push(format!("Need at least {minimum} {position}."));
        }
    }
    violations
}
