pub mod contest;
pub mod error;
pub mod lineup;
pub mod player;
pub mod slot;
pub mod text;
pub mod validation;

pub use contest::{ContestMode, PlacementIntent};
pub use error::{ModelError, Result};
pub use lineup::{LineupState, SlotEntry};
pub use player::{PlayerKey, PlayerRecord, Position};
pub use slot::{Accepts, SlotKind, SlotSpec, SlotTemplate};
pub use text::canonical_name;
pub use validation::ValidationResult;
