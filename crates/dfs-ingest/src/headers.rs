//! Case-insensitive header resolution against per-field synonym lists.

use std::collections::HashMap;

use crate::row::FeedRow;

/// Logical fields a salary feed may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    NameWithId,
    Position,
    RosterPosition,
    Team,
    Salary,
    Opponent,
    GameInfo,
}

impl FieldKey {
    /// Accepted header spellings, most preferred first.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            FieldKey::Name => &["name", "player", "player name"],
            FieldKey::NameWithId => &["name + id"],
            FieldKey::Position => &["position", "pos"],
            FieldKey::RosterPosition => &["roster position", "rosterpos", "roster"],
            FieldKey::Team => &["teamabbrev", "team", "tm", "team abbrev"],
            FieldKey::Salary => &["salary", "sal", "cost"],
            FieldKey::Opponent => &["opponent", "opp", "oppt"],
            FieldKey::GameInfo => &["gameinfo", "game info", "game"],
        }
    }
}

/// Lowercased, trimmed header name to the raw header of one row.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    by_normalized: HashMap<String, String>,
}

impl HeaderIndex {
    pub fn for_row(row: &FeedRow) -> Self {
        let mut by_normalized = HashMap::new();
        for header in row.headers() {
            // A later column with the same normalized name wins.
            by_normalized.insert(header.trim().to_lowercase(), header.to_string());
        }
        Self { by_normalized }
    }

    /// Raw header for the first synonym present in the row.
    pub fn resolve(&self, field: FieldKey) -> Option<&str> {
        field
            .synonyms()
            .iter()
            .find_map(|synonym| self.by_normalized.get(*synonym))
            .map(String::as_str)
    }

    /// Position column, falling back to the roster-position column.
    pub fn resolve_position(&self) -> Option<&str> {
        self.resolve(FieldKey::Position)
            .or_else(|| self.resolve(FieldKey::RosterPosition))
    }
}
