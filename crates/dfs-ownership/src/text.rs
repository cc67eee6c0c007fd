//! Free-text ownership tables pasted from projection sites.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::canonical::ownership_key;
use crate::dictionary::OwnershipDictionary;

/// First `<number>%` in a string.
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("Invalid percent regex"));

/// A percentage and everything after it.
static PERCENT_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%.*$").expect("Invalid percent tail regex"));

/// Dash and separator runs left behind once the percentage is cut.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\u{2013}\u{2014}|,]+").expect("Invalid separator regex"));

fn find_percent(text: &str) -> Option<f64> {
    PERCENT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Split a single line into a display name and percentage.
///
/// Returns `None` when either half is missing.
pub fn parse_ownership_line(line: &str) -> Option<(String, f64)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line
        .split([',', '\t', '|'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let mut percent = find_percent(line);
    let name = if parts.len() >= 2 {
        if percent.is_none() {
            percent = parts[1..].iter().find_map(|part| find_percent(part));
        }
        parts[0].to_string()
    } else {
        let without_percent = PERCENT_TAIL.replace(line, "");
        SEPARATORS
            .replace_all(&without_percent, " ")
            .trim()
            .to_string()
    };

    if name.is_empty() {
        return None;
    }
    percent.map(|value| (name, value))
}

/// Parse a pasted ownership table, one player per line.
///
/// Lines without a usable name or percentage are dropped. Later lines
/// overwrite earlier ones that canonicalize to the same key.
pub fn parse_pasted_ownership(text: &str) -> OwnershipDictionary {
    let mut dict = OwnershipDictionary::new();
    let mut skipped = 0usize;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some((name, value)) = parse_ownership_line(line) else {
            debug!(line, "skipping ownership line without name or percentage");
            skipped += 1;
            continue;
        };
        let key = ownership_key(&name);
        if key.is_empty() {
            debug!(line, "skipping ownership line with empty canonical name");
            skipped += 1;
            continue;
        }
        dict.insert(key, value);
    }

    info!(entries = dict.len(), skipped, "parsed pasted ownership");
    dict
}
