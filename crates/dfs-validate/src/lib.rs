#![deny(unsafe_code)]

//! Lineup validation.
//!
//! Violations are plain messages collected in a fixed order; validating
//! never fails and never panics, whatever shape the lineup is in.

mod checks;

pub use crate::checks::salary::group_thousands;

use tracing::debug;

use dfs_lineup::salary_used;
use dfs_model::{ContestMode, LineupState, ValidationResult};

/// Check a lineup against the rules of its contest format.
pub fn validate_lineup(state: &LineupState, mode: ContestMode) -> ValidationResult {
    let total_salary = salary_used(state);
    let mut violations = checks::salary::check(total_salary);

    let position_counts = match mode {
        ContestMode::Classic => {
            let counts = checks::roster::count_positions(state);
            violations.extend(checks::roster::check(state, &counts));
            counts
        }
        ContestMode::Showdown => {
            violations.extend(checks::showdown::check(state));
            Default::default()
        }
    };

    debug!(
        mode = %mode,
        total_salary,
        violations = violations.len(),
        "validated lineup"
    );

    ValidationResult {
        valid: violations.is_empty(),
        violations,
        total_salary,
        position_counts,
    }
}
