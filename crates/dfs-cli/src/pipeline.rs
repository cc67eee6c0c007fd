//! Player pool loading and lineup assembly.
//!
//! Stages run in order:
//! 1. **Pool**: read and normalize the salary feed, or reuse the cached pool
//!    when the salary file is unchanged
//! 2. **Ownership**: parse ownership sources and merge them onto players
//! 3. **Assemble**: place picks one at a time, collecting rejections
//! 4. **Validate**: check the finished lineup against its contest rules
//!
//! Editing a saved lineup reuses stages 3 and 4 on top of the stored slots.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use dfs_ingest::{normalize_players, read_csv_rows};
use dfs_lineup::{remove_slot, try_place};
use dfs_model::{ContestMode, LineupState, PlayerRecord, ValidationResult};
use dfs_ownership::{
    OwnershipDictionary, apply_ownership, parse_ownership_rows, parse_pasted_ownership,
};
use dfs_persistence::{
    LineupId, LineupRepository, PlayerCache, PlayerCacheStore, SavedLineup, StoredLineup,
    compute_file_hash,
};
use dfs_standards::empty_lineup;
use dfs_validate::validate_lineup;

use crate::picks::PickSpec;

/// Where the player pool and its ownership come from.
#[derive(Debug, Clone, Default)]
pub struct PoolSources {
    /// Salary export. `None` uses the cached pool.
    pub salaries: Option<PathBuf>,
    pub ownership_csv: Option<PathBuf>,
    pub ownership_text: Option<PathBuf>,
}

impl PoolSources {
    pub fn has_ownership(&self) -> bool {
        self.ownership_csv.is_some() || self.ownership_text.is_some()
    }
}

/// How the pool was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolOrigin {
    Parsed {
        rows: usize,
        rejected: usize,
        duplicates_collapsed: usize,
    },
    Cached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipSummary {
    pub entries: usize,
    pub matched: usize,
}

#[derive(Debug, Clone)]
pub struct PlayerPool {
    pub players: Vec<PlayerRecord>,
    pub file_name: String,
    pub origin: PoolOrigin,
    pub ownership: Option<OwnershipSummary>,
}

impl PlayerPool {
    /// The feed carried showdown CPT/FLEX markers.
    pub fn looks_like_showdown(&self) -> bool {
        self.players.iter().any(PlayerRecord::has_showdown_marker)
    }

    /// An explicit mode wins, then a showdown feed, then `fallback`.
    pub fn contest_mode(
        &self,
        explicit: Option<ContestMode>,
        fallback: ContestMode,
    ) -> ContestMode {
        match explicit {
            Some(mode) => mode,
            None if self.looks_like_showdown() => {
                info!("salary feed has showdown markers, using showdown mode");
                ContestMode::Showdown
            }
            None => fallback,
        }
    }
}

/// Load the player pool and merge any ownership sources onto it.
pub fn load_player_pool(
    sources: &PoolSources,
    cache: &dyn PlayerCacheStore,
) -> Result<PlayerPool> {
    let span = info_span!("pool");
    let _guard = span.enter();

    let mut pool = match &sources.salaries {
        Some(path) => match reusable_cache(path, cache) {
            Some(cached) => cached,
            None => parse_salary_file(path, cache)?,
        },
        None => {
            let Some(cached) = cache.load().context("read player cache")? else {
                bail!("no cached player pool; pass a salary file first");
            };
            info!(players = cached.players.len(), file = %cached.file_name, "using cached pool");
            PlayerPool {
                players: cached.players,
                file_name: cached.file_name,
                origin: PoolOrigin::Cached,
                ownership: None,
            }
        }
    };

    if let Some(dict) = load_ownership(sources)? {
        let reconciliation = apply_ownership(std::mem::take(&mut pool.players), &dict);
        pool.ownership = Some(OwnershipSummary {
            entries: dict.len(),
            matched: reconciliation.matched,
        });
        pool.players = reconciliation.players;
    }
    Ok(pool)
}

fn reusable_cache(path: &Path, cache: &dyn PlayerCacheStore) -> Option<PlayerPool> {
    let cached = match cache.load() {
        Ok(cached) => cached?,
        Err(error) => {
            warn!(%error, "ignoring unreadable player cache");
            return None;
        }
    };
    match cached.matches_source(path) {
        Ok(true) => {
            info!(players = cached.players.len(), "salary file unchanged, using cached pool");
            Some(PlayerPool {
                players: cached.players,
                file_name: cached.file_name,
                origin: PoolOrigin::Cached,
                ownership: None,
            })
        }
        Ok(false) => None,
        Err(error) => {
            debug!(%error, "could not fingerprint salary file");
            None
        }
    }
}

fn parse_salary_file(path: &Path, cache: &dyn PlayerCacheStore) -> Result<PlayerPool> {
    let rows = read_csv_rows(path).with_context(|| format!("read {}", path.display()))?;
    let feed = normalize_players(&rows);
    if let Some(diagnostic) = feed.diagnostic() {
        bail!("{}: {diagnostic}", path.display());
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let hash = compute_file_hash(path).context("fingerprint salary file")?;
    let entry = PlayerCache::new(feed.players.clone(), file_name.clone()).with_source_hash(hash);
    if let Err(error) = cache.store(&entry) {
        warn!(%error, "could not cache player pool");
    }

    Ok(PlayerPool {
        origin: PoolOrigin::Parsed {
            rows: rows.len(),
            rejected: feed.rejected_count(),
            duplicates_collapsed: feed.duplicates_collapsed,
        },
        players: feed.players,
        file_name,
        ownership: None,
    })
}

/// Parse the ownership sources into one dictionary; text entries win.
pub fn load_ownership(sources: &PoolSources) -> Result<Option<OwnershipDictionary>> {
    if !sources.has_ownership() {
        return Ok(None);
    }
    let mut dict = OwnershipDictionary::new();
    if let Some(path) = &sources.ownership_csv {
        let rows = read_csv_rows(path).with_context(|| format!("read {}", path.display()))?;
        dict.merge(&parse_ownership_rows(&rows));
    }
    if let Some(path) = &sources.ownership_text {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        dict.merge(&parse_pasted_ownership(&text));
    }
    Ok(Some(dict))
}

/// What happened to one pick.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Placed {
        pick: PickSpec,
        player: String,
        slot: usize,
    },
    Rejected {
        pick: PickSpec,
        reason: String,
    },
}

impl PickOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PickOutcome::Placed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub mode: ContestMode,
    pub state: LineupState,
    pub outcomes: Vec<PickOutcome>,
    pub validation: ValidationResult,
}

impl Assembly {
    pub fn rejected(&self) -> impl Iterator<Item = &PickOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_placed())
    }
}

/// Place picks in order onto an empty lineup, then validate it.
///
/// A pick that cannot be resolved or placed is recorded and skipped.
pub fn assemble_lineup(
    players: &[PlayerRecord],
    mode: ContestMode,
    picks: &[PickSpec],
) -> Assembly {
    assemble_onto(empty_lineup(mode), players, mode, picks)
}

/// Place picks in order onto an existing lineup, then validate it.
pub fn assemble_onto(
    start: LineupState,
    players: &[PlayerRecord],
    mode: ContestMode,
    picks: &[PickSpec],
) -> Assembly {
    let span = info_span!("assemble", mode = %mode);
    let _guard = span.enter();

    let mut state = start;
    let mut outcomes = Vec::with_capacity(picks.len());
    for pick in picks {
        let placed = pick
            .resolve(players)
            .map_err(|error| error.to_string())
            .and_then(|player| {
                try_place(player, &state, mode, pick.intent)
                    .map(|(next, slot)| (player.name.clone(), next, slot))
                    .map_err(|rejection| rejection.to_string())
            });
        match placed {
            Ok((player, next, slot)) => {
                state = next;
                outcomes.push(PickOutcome::Placed {
                    pick: pick.clone(),
                    player,
                    slot,
                });
            }
            Err(reason) => {
                debug!(pick = %pick, %reason, "pick skipped");
                outcomes.push(PickOutcome::Rejected {
                    pick: pick.clone(),
                    reason,
                });
            }
        }
    }

    let validation = validate_lineup(&state, mode);
    info!(
        picks = picks.len(),
        filled = state.filled_count(),
        valid = validation.valid,
        "assembled lineup"
    );
    Assembly {
        mode,
        state,
        outcomes,
        validation,
    }
}

/// Changes to apply to a saved lineup.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineupEdit<'a> {
    /// Slots to clear first, numbered from 1 as printed.
    pub drop_slots: &'a [usize],
    /// Picks placed into the open slots after dropping.
    pub picks: &'a [PickSpec],
    /// New title. `None` keeps the saved one.
    pub title: Option<&'a str>,
}

#[derive(Debug)]
pub struct EditOutcome {
    pub previous: StoredLineup,
    pub assembly: Assembly,
    /// Set when the edited lineup was valid and written back.
    pub updated: Option<StoredLineup>,
}

/// Load a saved lineup, apply `edit`, and write it back under the same id
/// when the result is valid. An invalid result leaves the stored copy alone.
pub fn edit_saved_lineup(
    repo: &mut dyn LineupRepository,
    id: LineupId,
    mode: ContestMode,
    players: &[PlayerRecord],
    edit: &LineupEdit<'_>,
) -> Result<EditOutcome> {
    let span = info_span!("edit", id, mode = %mode);
    let _guard = span.enter();

    let previous = repo.get(id, mode).context("load lineup")?;
    let mut state = previous.lineup.to_lineup_state();
    for &slot in edit.drop_slots {
        let index = slot.checked_sub(1).context("slots are numbered from 1")?;
        state = remove_slot(index, &state).with_context(|| format!("clear slot {slot}"))?;
    }

    let assembly = assemble_onto(state, players, mode, edit.picks);
    let updated = if assembly.validation.valid {
        let title = edit.title.unwrap_or(&previous.lineup.title);
        let lineup = SavedLineup::from_lineup(title, &assembly.state, mode);
        let stored = repo.update(id, lineup).context("update lineup")?;
        info!(id, "updated saved lineup");
        Some(stored)
    } else {
        warn!(
            id,
            violations = assembly.validation.violations.len(),
            "edited lineup is invalid, not saved"
        );
        None
    };

    Ok(EditOutcome {
        previous,
        assembly,
        updated,
    })
}
