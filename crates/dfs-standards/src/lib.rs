#![deny(unsafe_code)]

//! Fixed contract constants for classic and showdown contests.

pub mod teams;
pub mod templates;

pub use crate::teams::{TEAM_ALIASES, TeamAliases, is_team_code};
pub use crate::templates::{
    CLASSIC_TEMPLATE, SHOWDOWN_TEMPLATE, empty_lineup, required_minimums, template_for,
};

/// Total spend limit across every slot cost in a lineup.
pub const SALARY_CAP: i64 = 50_000;

/// Salary multiplier applied to the showdown captain.
pub const CAPTAIN_MULTIPLIER: f64 = 1.5;

/// Captain cost: `round(salary * 1.5)` with halves rounded up.
///
/// Computed in integers (`ceil(3 * salary / 2)`) so the result never depends
/// on float rounding.
pub fn captain_cost(salary: u32) -> i64 {
    (i64::from(salary) * 3 + 1) / 2
}
