//! Canonical player records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::canonical_name;

/// Roster position of a player.
///
/// Salary feeds occasionally carry codes outside the five football
/// positions (showdown `CPT`/`FLEX` markers, typos). Those are preserved in
/// `Other` so the record survives normalization, but no slot accepts them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    Dst,
    Other(String),
}

impl Position {
    /// The five positions a lineup is built from, in display order.
    pub const ROSTER: [Position; 5] = [
        Position::Qb,
        Position::Rb,
        Position::Wr,
        Position::Te,
        Position::Dst,
    ];

    /// Parse an already-uppercased position code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "QB" => Position::Qb,
            "RB" => Position::Rb,
            "WR" => Position::Wr,
            "TE" => Position::Te,
            "DST" => Position::Dst,
            other => Position::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::Dst => "DST",
            Position::Other(code) => code,
        }
    }

    /// True for RB, WR and TE, the positions a classic FLEX slot accepts.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::Rb | Position::Wr | Position::Te)
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::from_code(&value.trim().to_uppercase())
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a player within a lineup: canonical name plus team code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerKey {
    pub name: String,
    pub team: String,
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.name, self.team)
    }
}

/// A player as produced by the salary feed normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Trimmed display name, ID suffixes removed.
    pub name: String,
    pub position: Position,
    /// Uppercased roster-position column, empty when the feed has none.
    #[serde(default)]
    pub roster_position: String,
    /// Uppercased team code.
    pub team: String,
    /// `@TEAM` for away games, `vs TEAM` for home games.
    #[serde(default)]
    pub opponent: Option<String>,
    pub salary: u32,
    #[serde(default)]
    pub game_info: String,
    /// Projected or observed ownership percentage.
    #[serde(default)]
    pub ownership: Option<f64>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, position: Position, team: &str, salary: u32) -> Self {
        Self {
            name: name.into().trim().to_string(),
            position,
            roster_position: String::new(),
            team: team.trim().to_uppercase(),
            opponent: None,
            salary,
            game_info: String::new(),
            ownership: None,
        }
    }

    pub fn key(&self) -> PlayerKey {
        PlayerKey {
            name: canonical_name(&self.name),
            team: self.team.trim().to_uppercase(),
        }
    }

    /// True when the row came from a showdown export (CPT/FLEX markers).
    pub fn has_showdown_marker(&self) -> bool {
        let marker = |value: &str| value == "CPT" || value == "FLEX";
        marker(self.position.as_str()) || marker(&self.roster_position)
    }

    #[must_use]
    pub fn with_ownership(mut self, ownership: f64) -> Self {
        self.ownership = Some(ownership);
        self
    }
}
