#![deny(unsafe_code)]

//! Placement engine for classic and showdown lineups.
//!
//! Every operation takes a lineup by reference and returns a new one; the
//! input is never modified. Placement keeps two invariants: at most one
//! captain, and no identity key in more than one slot.

pub mod cost;
pub mod placement;
pub mod pool;

pub use cost::{remaining_per_slot, remaining_salary, salary_used, slot_cost};
pub use placement::{PlacementRejection, can_place, place, remove_slot, try_place};
pub use pool::{
    DEFAULT_PLAYER_LIMIT, PlayerFilter, PositionFilter, filter_players, lineup_ownership,
};
