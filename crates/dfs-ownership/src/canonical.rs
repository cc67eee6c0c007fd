//! Canonical keys for ownership matching.

use std::sync::LazyLock;

use regex::Regex;

use dfs_model::canonical_name;

/// Detects names that refer to a team defense.
static DEFENSE_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:defense|def|d/st|dst)\b|d/st|d-st|[a-z]dst\b")
        .expect("Invalid defense-style regex")
});

/// Marker removals, applied in order.
static DEFENSE_MARKERS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\bdefense\b").expect("Invalid defense regex"),
        Regex::new(r"(?i)\bdef\b").expect("Invalid def regex"),
        Regex::new(r"(?i)\bd/st\b").expect("Invalid d/st regex"),
        Regex::new(r"(?i)\bdst\b").expect("Invalid dst regex"),
        Regex::new(r"(?i)d/st").expect("Invalid compact d/st regex"),
        Regex::new(r"(?i)d-?st").expect("Invalid compact d-st regex"),
    ]
});

/// True when the name carries a defense marker (`DST`, `D/ST`, `Defense`, ...).
pub fn is_defense_style(name: &str) -> bool {
    DEFENSE_STYLE.is_match(name)
}

/// Remove defense markers from a defense-style name.
///
/// Names without a marker are returned trimmed but otherwise unchanged, so
/// player surnames containing the letters `dst` are never altered.
pub fn strip_defense_markers(name: &str) -> String {
    if !is_defense_style(name) {
        return name.trim().to_string();
    }
    let mut out = name.to_string();
    for marker in DEFENSE_MARKERS.iter() {
        out = marker.replace_all(&out, "").into_owned();
    }
    out.trim().to_string()
}

/// Dictionary key for a name: defense markers stripped, then canonicalized.
///
/// ```
/// use dfs_ownership::ownership_key;
///
/// assert_eq!(ownership_key("Ravens D/ST"), "ravens");
/// assert_eq!(ownership_key("Brian Thomas Jr."), "brian thomas");
/// ```
pub fn ownership_key(name: &str) -> String {
    canonical_name(&strip_defense_markers(name))
}
