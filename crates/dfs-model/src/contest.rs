//! Contest formats and placement intents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Supported contest formats. Each has its own fixed slot template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContestMode {
    /// Nine-slot roster with a RB/WR/TE flex.
    #[default]
    Classic,
    /// Single-game roster: one captain plus five flex slots.
    Showdown,
}

impl ContestMode {
    /// Returns the wire name used by saved lineups.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContestMode::Classic => "CLASSIC",
            ContestMode::Showdown => "SHOWDOWN",
        }
    }

    pub fn is_showdown(&self) -> bool {
        matches!(self, ContestMode::Showdown)
    }
}

impl fmt::Display for ContestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContestMode {
    type Err = ModelError;

    /// Parse a contest mode (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLASSIC" => Ok(ContestMode::Classic),
            "SHOWDOWN" => Ok(ContestMode::Showdown),
            _ => Err(ModelError::UnknownContestMode(s.to_string())),
        }
    }
}

/// Where the caller wants a player to go.
///
/// Classic contests only honour `Auto`; the explicit variants select a
/// showdown slot category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlacementIntent {
    #[default]
    Auto,
    Captain,
    Flex,
}

impl PlacementIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementIntent::Auto => "AUTO",
            PlacementIntent::Captain => "CPT",
            PlacementIntent::Flex => "FLEX",
        }
    }
}

impl fmt::Display for PlacementIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlacementIntent {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AUTO" => Ok(PlacementIntent::Auto),
            "CPT" | "CAPTAIN" => Ok(PlacementIntent::Captain),
            "FLEX" => Ok(PlacementIntent::Flex),
            _ => Err(ModelError::UnknownPlacementIntent(s.to_string())),
        }
    }
}
