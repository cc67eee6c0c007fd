//! Player picks given on the command line as `NAME[:TEAM][@CPT|@FLEX]`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use dfs_model::{PlacementIntent, PlayerRecord, canonical_name};
use dfs_standards::is_team_code;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("pick is empty")]
    Empty,
    #[error("unknown slot suffix `@{0}` (expected @CPT or @FLEX)")]
    UnknownIntent(String),
    #[error("unknown team code `{0}`")]
    UnknownTeam(String),
    #[error("no player named `{name}` in the pool")]
    NotFound { name: String },
    #[error("`{name}` matches players on {teams}; add :TEAM to choose")]
    Ambiguous { name: String, teams: String },
}

/// One requested placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSpec {
    pub name: String,
    /// Uppercased team code narrowing the match.
    pub team: Option<String>,
    pub intent: PlacementIntent,
}

impl PickSpec {
    /// Find the pool player this pick names.
    ///
    /// Names compare by canonical form, so suffixes and punctuation do not
    /// matter.
    pub fn resolve<'a>(&self, players: &'a [PlayerRecord]) -> Result<&'a PlayerRecord, PickError> {
        let wanted = canonical_name(&self.name);
        let matches: Vec<&PlayerRecord> = players
            .iter()
            .filter(|player| canonical_name(&player.name) == wanted)
            .filter(|player| self.team.as_deref().is_none_or(|team| player.team == team))
            .collect();
        match matches.as_slice() {
            [] => Err(PickError::NotFound {
                name: self.name.clone(),
            }),
            [player] => Ok(player),
            many => Err(PickError::Ambiguous {
                name: self.name.clone(),
                teams: many
                    .iter()
                    .map(|player| player.team.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl FromStr for PickSpec {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, intent) = match s.rsplit_once('@') {
            Some((rest, suffix)) => {
                let intent = suffix
                    .parse::<PlacementIntent>()
                    .map_err(|_| PickError::UnknownIntent(suffix.trim().to_string()))?;
                (rest, intent)
            }
            None => (s, PlacementIntent::Auto),
        };
        let (name, team) = match rest.rsplit_once(':') {
            Some((name, team)) => {
                let team = team.trim().to_uppercase();
                if !team.is_empty() && !is_team_code(&team) {
                    return Err(PickError::UnknownTeam(team));
                }
                (name, (!team.is_empty()).then_some(team))
            }
            None => (rest, None),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(PickError::Empty);
        }
        Ok(Self {
            name: name.to_string(),
            team,
            intent,
        })
    }
}

impl fmt::Display for PickSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(team) = &self.team {
            write!(f, ":{team}")?;
        }
        if self.intent != PlacementIntent::Auto {
            write!(f, "@{}", self.intent)?;
        }
        Ok(())
    }
}
