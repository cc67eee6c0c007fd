//! Stored document shapes.

mod saved;
mod stored;

pub use saved::SavedLineup;
pub use stored::{LineupId, StoredLineup, round_ownership};
