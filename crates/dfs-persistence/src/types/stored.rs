use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dfs_model::ContestMode;

use super::saved::SavedLineup;

/// Numeric id, unique within a contest mode.
pub type LineupId = u64;

/// A saved lineup as held by a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLineup {
    pub id: LineupId,
    pub lineup: SavedLineup,
    pub total_ownership: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredLineup {
    pub fn new(id: LineupId, lineup: SavedLineup, now: DateTime<Utc>) -> Self {
        Self {
            id,
            total_ownership: round_ownership(lineup.ownership_sum()),
            lineup,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the document, keeping id and creation time.
    pub fn replace(&mut self, lineup: SavedLineup, now: DateTime<Utc>) {
        self.total_ownership = round_ownership(lineup.ownership_sum());
        self.lineup = lineup;
        self.updated_at = now;
    }

    pub fn mode(&self) -> ContestMode {
        self.lineup.contest_mode
    }
}

/// Round to two decimals, halves away from zero.
///
/// Works on the shortest decimal rendering of the value so inputs such as
/// `1.005` round to `1.01` rather than following their binary expansion.
pub fn round_ownership(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let text = value.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let Ok(whole) = whole.parse::<u64>() else {
        return (value * 100.0).round() / 100.0;
    };

    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let cents = whole as f64 * 100.0 + (tenths * 10 + hundredths + u64::from(round_up)) as f64;
    (cents / 100.0).copysign(value)
}
