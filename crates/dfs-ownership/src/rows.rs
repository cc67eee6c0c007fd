//! Ownership tables loaded from CSV exports.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use dfs_ingest::FeedRow;

use crate::canonical::ownership_key;
use crate::dictionary::OwnershipDictionary;

static NAME_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name|player").expect("Invalid name header regex"));

static OWNERSHIP_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)own").expect("Invalid ownership header regex"));

/// Parse a percentage cell, keeping only digits and dots. Garbage parses as 0.
fn parse_percent_cell(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Build a dictionary from CSV rows.
///
/// The name column is the first header matching `name` or `player`; the
/// ownership column is the first header containing `own`. Columns are
/// resolved per row so concatenated exports with differing headers work.
pub fn parse_ownership_rows(rows: &[FeedRow]) -> OwnershipDictionary {
    let mut dict = OwnershipDictionary::new();
    let mut skipped = 0usize;

    for (idx, row) in rows.iter().enumerate() {
        let name_header = row.headers().find(|header| NAME_HEADER.is_match(header));
        let own_header = row
            .headers()
            .find(|header| OWNERSHIP_HEADER.is_match(header));
        let (Some(name_header), Some(own_header)) = (name_header, own_header) else {
            debug!(row = idx, "ownership row lacks name or ownership column");
            skipped += 1;
            continue;
        };

        let name = row.get(name_header).unwrap_or_default().trim();
        if name.is_empty() {
            debug!(row = idx, "ownership row has empty name");
            skipped += 1;
            continue;
        }
        let key = ownership_key(name);
        if key.is_empty() {
            debug!(row = idx, name, "ownership row name canonicalizes to nothing");
            skipped += 1;
            continue;
        }
        let value = parse_percent_cell(row.get(own_header).unwrap_or_default());
        dict.insert(key, value);
    }

    info!(entries = dict.len(), skipped, "parsed ownership rows");
    dict
}
