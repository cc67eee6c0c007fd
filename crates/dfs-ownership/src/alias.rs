//! Synthetic `dst-<TEAM>` entries for team defenses.
//!
//! Ownership sources name defenses by nickname or city ("Ravens",
//! "Baltimore D/ST") while salary feeds use whatever the site prints. The
//! alias table bridges the two through the team code.

use tracing::debug;

use dfs_standards::TEAM_ALIASES;

use crate::dictionary::OwnershipDictionary;

/// Dictionary key for a team's defense, e.g. `dst-BAL`.
pub fn defense_key(team: &str) -> String {
    format!("dst-{}", team.trim().to_uppercase())
}

/// Derive `dst-<TEAM>` entries from every dictionary key containing one of
/// the team's alias tokens.
///
/// Keys are visited in dictionary order and teams in table order; when
/// several keys match the same team the last one wins.
pub fn alias_defenses(dict: &OwnershipDictionary) -> OwnershipDictionary {
    let mut aliases = OwnershipDictionary::new();
    for (key, value) in dict.iter() {
        for (team, tokens) in TEAM_ALIASES {
            if tokens.iter().any(|token| key.contains(token)) {
                debug!(key, team, "ownership key aliases team defense");
                aliases.insert(defense_key(team), value);
            }
        }
    }
    aliases
}

/// The dictionary with its synthetic defense entries merged in.
pub fn with_defense_aliases(mut dict: OwnershipDictionary) -> OwnershipDictionary {
    let aliases = alias_defenses(&dict);
    dict.merge(&aliases);
    dict
}
