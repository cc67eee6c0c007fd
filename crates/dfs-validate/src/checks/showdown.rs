//! Showdown fill and team diversity.

use std::collections::BTreeSet;

use dfs_model::LineupState;
use dfs_standards::SHOWDOWN_TEMPLATE;

use super::{has_open_slot, template_slots};

pub fn check(state: &LineupState) -> Vec<String> {
    let mut violations = Vec::new();
    if has_open_slot(&SHOWDOWN_TEMPLATE, state) {
        violations.push(format!(
            "Lineup must have exactly {} players.",
            SHOWDOWN_TEMPLATE.len()
        ));
    }
    let teams: BTreeSet<&str> = template_slots(&SHOWDOWN_TEMPLATE, state)
        .filter_map(|(_, entry)| entry.map(|entry| entry.player.team.as_str()))
        .collect();
    if teams.len() < 2 {
        violations.push("Lineup must include players from both teams.".to_string());
    }
    violations
}
