//! League team codes with the lowercase alias tokens used to recognise
//! defense entries in ownership tables.
//!
//! Multi-word names appear both spaced and unspaced so they match keys that
//! went through whitespace collapsing as well as ones typed without spaces.

/// A team code and its alias tokens.
pub type TeamAliases = (&'static str, &'static [&'static str]);

/// All league teams in alphabetical code order.
pub const TEAM_ALIASES: &[TeamAliases] = &[
    ("ARI", &["cardinals", "ari", "arizona"]),
    ("ATL", &["falcons", "atl", "atlanta"]),
    ("BAL", &["ravens", "bal", "baltimore"]),
    ("BUF", &["bills", "buf", "buffalo"]),
    ("CAR", &["panthers", "car", "carolina"]),
    ("CHI", &["bears", "chi", "chicago"]),
    ("CIN", &["bengals", "cin", "cincinnati"]),
    ("CLE", &["browns", "cle", "cleveland"]),
    ("DAL", &["cowboys", "dal", "dallas"]),
    ("DEN", &["broncos", "den", "denver"]),
    ("DET", &["lions", "det", "detroit"]),
    ("GB", &["packers", "gb", "greenbay", "green bay"]),
    ("HOU", &["texans", "hou", "houston"]),
    ("IND", &["colts", "ind", "indianapolis"]),
    ("JAX", &["jaguars", "jax", "jacksonville", "jags"]),
    ("KC", &["chiefs", "kc", "kansas city", "kansascity"]),
    (
        "LAC",
        &[
            "chargers",
            "lac",
            "los angeles chargers",
            "la chargers",
            "san diego chargers",
        ],
    ),
    (
        "LAR",
        &["rams", "lar", "los angeles rams", "la rams", "st louis rams"],
    ),
    (
        "LV",
        &["raiders", "lv", "las vegas raiders", "oakland raiders"],
    ),
    ("MIA", &["dolphins", "mia", "miami"]),
    ("MIN", &["vikings", "min", "minnesota"]),
    ("NE", &["patriots", "ne", "new england", "newengland"]),
    ("NO", &["saints", "no", "new orleans", "neworleans"]),
    (
        "NYG",
        &["giants", "nyg", "new york giants", "newyork giants"],
    ),
    ("NYJ", &["jets", "nyj", "new york jets", "newyork jets"]),
    ("PHI", &["eagles", "phi", "philadelphia"]),
    ("PIT", &["steelers", "pit", "pittsburgh"]),
    ("SEA", &["seahawks", "sea", "hawks", "seattle"]),
    (
        "SF",
        &[
            "49ers",
            "sf",
            "san francisco",
            "niners",
            "fortyniners",
            "forty niners",
        ],
    ),
    (
        "TB",
        &["buccaneers", "tb", "bucs", "tampa bay", "tampabay"],
    ),
    ("TEN", &["titans", "ten", "tennessee"]),
    (
        "WAS",
        &["commanders", "was", "washington", "wft", "football team"],
    ),
];

/// Alias tokens for a team code (case-insensitive lookup).
fn aliases_for(code: &str) -> Option<&'static [&'static str]> {
    TEAM_ALIASES
        .iter()
        .find(|(team, _)| team.eq_ignore_ascii_case(code.trim()))
        .map(|(_, aliases)| *aliases)
}

/// True for a league team code, ignoring case and surrounding whitespace.
pub fn is_team_code(code: &str) -> bool {
    aliases_for(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_league() {
        assert_eq!(TEAM_ALIASES.len(), 32);
        let mut codes: Vec<&str> = TEAM_ALIASES.iter().map(|(code, _)| *code).collect();
        let sorted = {
            let mut copy = codes.clone();
            copy.sort_unstable();
            copy
        };
        assert_eq!(codes, sorted);
        codes.dedup();
        assert_eq!(codes.len(), 32);
    }

    #[test]
    fn aliases_are_lowercase() {
        for (code, aliases) in TEAM_ALIASES {
            assert!(!aliases.is_empty(), "{code}");
            for alias in *aliases {
                assert_eq!(*alias, alias.to_lowercase(), "{code}: {alias}");
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(aliases_for("kc").unwrap().contains(&"kansas city"));
        assert!(is_team_code(" SF "));
        assert!(!is_team_code("XYZ"));
    }
}
