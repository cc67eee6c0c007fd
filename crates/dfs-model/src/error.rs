use thiserror::Error;

/// Programmer-error conditions raised by the lineup model.
///
/// Data-quality problems in feeds never surface here; they are recorded as
/// row outcomes or validation messages instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown contest mode: {0}")]
    UnknownContestMode(String),
    #[error("unknown placement intent: {0}")]
    UnknownPlacementIntent(String),
    #[error("slot index {index} out of range for a {len}-slot lineup")]
    SlotIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
