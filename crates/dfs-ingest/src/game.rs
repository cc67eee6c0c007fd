//! Opponent derivation from game-info strings such as `IND@MIA 01/05/2025`.

use std::sync::LazyLock;

use regex::Regex;

static AWAY_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Z]{2,4})").expect("Invalid away-team regex"));

static HOME_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{2,4})@").expect("Invalid home-team regex"));

static VERSUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i:vs)\s+([A-Z]{2,4})").expect("Invalid versus regex"));

fn capture<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Opponent of `team` in a game-info string.
///
/// `@X` (player's team is away at X) yields `@X`; `X@` (X visits the
/// player's team) yields `vs X`; `vs X` yields `vs X`. Matches naming the
/// player's own team are skipped.
pub fn derive_opponent(game_info: &str, team: &str) -> Option<String> {
    let game_info = game_info.trim();
    if game_info.is_empty() {
        return None;
    }
    if let Some(code) = capture(&AWAY_AT, game_info).filter(|code| *code != team) {
        return Some(format!("@{code}"));
    }
    if let Some(code) = capture(&HOME_AT, game_info).filter(|code| *code != team) {
        return Some(format!("vs {code}"));
    }
    capture(&VERSUS, game_info)
        .filter(|code| *code != team)
        .map(|code| format!("vs {code}"))
}
