//! Persistence error types.
//!
//! Every storage operation returns a structured error with a user-facing
//! message and, where one exists, a hint for fixing it.

use std::path::PathBuf;

use thiserror::Error;

use dfs_model::ContestMode;

use crate::types::LineupId;

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {what} from {path}")]
    Deserialization {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Temp file was written but could not replace the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A save or update request failed its checks.
    #[error("Invalid lineup request: {0}")]
    InvalidRequest(String),

    #[error("{mode} lineup {id} not found")]
    NotFound { id: LineupId, mode: ContestMode },
}

impl PersistenceError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Serialization { what, .. } => {
                format!("An error occurred while writing the {what}.")
            }
            Self::Deserialization { what, path, .. } => format!(
                "The {what} at {} could not be read. The file may be corrupted.",
                path.display()
            ),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::InvalidRequest(reason) => format!("The lineup cannot be saved: {reason}."),
            Self::NotFound { id, mode } => {
                format!("No saved {} lineup has id {id}.", mode.as_str().to_lowercase())
            }
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Deserialization { .. } => {
                Some("Move the damaged file aside; a new one is created on the next save.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different storage path.".into())
            }
            Self::NotFound { .. } => Some("Run `lineups list` to see saved ids.".into()),
            Self::Serialization { .. } | Self::InvalidRequest(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
