//! Salary feed normalization.
//!
//! Each row is resolved independently into a [`RowOutcome`]. Accepted
//! records then go through showdown de-duplication when the feed carries
//! captain/flex duplicate rows.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use dfs_model::{PlayerKey, PlayerRecord, Position};

use crate::game::derive_opponent;
use crate::headers::{FieldKey, HeaderIndex};
use crate::row::FeedRow;

/// Trailing ID encodings in combined `Name + ID` columns, applied in order.
static NAME_ID_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\s*\(id:\s*\d+\)\s*$").expect("Invalid (id: N) regex"),
        Regex::new(r"\s*\(\d+\)\s*$").expect("Invalid (N) regex"),
        Regex::new(r"(?i)\s*[-\u{2013}\u{2014}]\s*id:\s*\d+$").expect("Invalid - id: N regex"),
        Regex::new(r"\s*[-\u{2013}\u{2014}]\s*\d+$").expect("Invalid - N regex"),
    ]
});

/// Why a row did not produce a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingNameColumn,
    MissingPositionColumn,
    MissingTeamColumn,
    MissingSalaryColumn,
    EmptyName,
    EmptyPosition,
    EmptyTeam,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingNameColumn => "no name column",
            RejectReason::MissingPositionColumn => "no position column",
            RejectReason::MissingTeamColumn => "no team column",
            RejectReason::MissingSalaryColumn => "no salary column",
            RejectReason::EmptyName => "empty name",
            RejectReason::EmptyPosition => "empty position",
            RejectReason::EmptyTeam => "empty team",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-row decision of the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(PlayerRecord),
    Rejected(RejectReason),
}

impl RowOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RowOutcome::Accepted(_))
    }

    pub fn player(&self) -> Option<&PlayerRecord> {
        match self {
            RowOutcome::Accepted(player) => Some(player),
            RowOutcome::Rejected(_) => None,
        }
    }
}

/// Result of normalizing a whole feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFeed {
    /// De-duplicated players in first-appearance order.
    pub players: Vec<PlayerRecord>,
    /// One outcome per input row, in input order.
    pub outcomes: Vec<RowOutcome>,
    /// Raw headers of the last row processed.
    pub last_headers: Vec<String>,
    /// The feed carried CPT/FLEX markers and was collapsed per player.
    pub showdown_detected: bool,
    /// Rows merged away by showdown de-duplication.
    pub duplicates_collapsed: usize,
}

impl NormalizedFeed {
    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.accepted_count()
    }

    /// Message for an empty result, naming the columns that were seen.
    pub fn diagnostic(&self) -> Option<String> {
        if !self.players.is_empty() {
            return None;
        }
        Some(format!(
            "0 players parsed \u{2014} columns found: {}",
            self.last_headers.join(", ")
        ))
    }
}

/// Remove a trailing ID from a combined `Name + ID` value.
pub fn strip_name_id(raw: &str) -> String {
    let mut name = raw.to_string();
    for pattern in NAME_ID_PATTERNS.iter() {
        name = pattern.replace(&name, "").into_owned();
    }
    name.trim().to_string()
}

/// Parse a salary cell: keep digits and dots, default to 0.
pub fn parse_salary(raw: &str) -> u32 {
    let digits: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value.round() as u32,
        _ => 0,
    }
}

fn cell<'a>(row: &'a FeedRow, header: Option<&str>) -> &'a str {
    header.and_then(|h| row.get(h)).unwrap_or("").trim()
}

/// Resolve a single row into a player or a rejection.
pub fn normalize_row(row: &FeedRow) -> RowOutcome {
    let index = HeaderIndex::for_row(row);
    let name_key = index.resolve(FieldKey::Name);
    let name_id_key = index.resolve(FieldKey::NameWithId);
    let roster_key = index.resolve(FieldKey::RosterPosition);
    let position_key = index.resolve_position();
    let team_key = index.resolve(FieldKey::Team);
    let salary_key = index.resolve(FieldKey::Salary);

    let Some(name_source) = name_key.or(name_id_key) else {
        return RowOutcome::Rejected(RejectReason::MissingNameColumn);
    };
    let Some(position_key) = position_key else {
        return RowOutcome::Rejected(RejectReason::MissingPositionColumn);
    };
    let Some(team_key) = team_key else {
        return RowOutcome::Rejected(RejectReason::MissingTeamColumn);
    };
    let Some(salary_key) = salary_key else {
        return RowOutcome::Rejected(RejectReason::MissingSalaryColumn);
    };

    let name = strip_name_id(cell(row, Some(name_source)));
    let position_raw = cell(row, Some(position_key)).to_uppercase();
    let position_code = position_raw.split('/').next().unwrap_or("").trim();
    let team = cell(row, Some(team_key)).to_uppercase();

    if name.is_empty() {
        return RowOutcome::Rejected(RejectReason::EmptyName);
    }
    if position_code.is_empty() {
        return RowOutcome::Rejected(RejectReason::EmptyPosition);
    }
    if team.is_empty() {
        return RowOutcome::Rejected(RejectReason::EmptyTeam);
    }

    let game_info = cell(row, index.resolve(FieldKey::GameInfo)).to_string();
    let explicit_opponent = cell(row, index.resolve(FieldKey::Opponent)).to_uppercase();
    let opponent = if explicit_opponent.is_empty() {
        derive_opponent(&game_info, &team)
    } else {
        Some(explicit_opponent)
    };

    let salary_raw = cell(row, Some(salary_key));
    let salary = parse_salary(salary_raw);
    if salary == 0 {
        warn!(player = %name, salary = %salary_raw, "salary did not parse, using 0");
    }

    RowOutcome::Accepted(PlayerRecord {
        name,
        position: Position::from_code(position_code),
        roster_position: cell(row, roster_key).to_uppercase(),
        team,
        opponent,
        salary,
        game_info,
        ownership: None,
    })
}

/// Normalize a salary feed.
///
/// Output is a pure function of the input rows: the same rows always yield
/// the same players in the same order.
pub fn normalize_players(rows: &[FeedRow]) -> NormalizedFeed {
    let mut outcomes = Vec::with_capacity(rows.len());
    let mut last_headers = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        last_headers = row.headers().map(str::to_string).collect();
        let outcome = normalize_row(row);
        if let RowOutcome::Rejected(reason) = &outcome {
            debug!(row = idx + 1, %reason, "dropped salary row");
        }
        outcomes.push(outcome);
    }

    let accepted: Vec<PlayerRecord> = outcomes
        .iter()
        .filter_map(RowOutcome::player)
        .cloned()
        .collect();
    let showdown_detected = accepted.iter().any(PlayerRecord::has_showdown_marker);
    let accepted_count = accepted.len();
    let players = if showdown_detected {
        collapse_showdown_duplicates(accepted)
    } else {
        accepted
    };
    let duplicates_collapsed = accepted_count - players.len();

    info!(
        rows = rows.len(),
        players = players.len(),
        rejected = rows.len() - accepted_count,
        showdown = showdown_detected,
        duplicates_collapsed,
        "normalized salary feed"
    );

    NormalizedFeed {
        players,
        outcomes,
        last_headers,
        showdown_detected,
        duplicates_collapsed,
    }
}

/// Keep one record per identity key: the lowest salary, first on ties.
fn collapse_showdown_duplicates(players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    let mut slots: HashMap<PlayerKey, usize> = HashMap::new();
    let mut out: Vec<PlayerRecord> = Vec::with_capacity(players.len());
    for player in players {
        let key = player.key();
        match slots.get(&key) {
            Some(&idx) => {
                if player.salary < out[idx].salary {
                    out[idx] = player;
                }
            }
            None => {
                slots.insert(key, out.len());
                out.push(player);
            }
        }
    }
    out
}
