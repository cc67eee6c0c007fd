use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use dfs_cli::pipeline::{
    LineupEdit, assemble_lineup, edit_saved_lineup, load_player_pool,
};
use dfs_cli::settings::Settings;
use dfs_lineup::{PlayerFilter, filter_players};
use dfs_model::ContestMode;
use dfs_persistence::{
    JsonFileRepository, JsonPlayerCache, LineupRepository, PlayerCacheStore, SavedLineup,
    StoredLineup,
};
use dfs_standards::empty_lineup;
use dfs_validate::validate_lineup;

use crate::cli::{BuildArgs, CacheCommand, EditArgs, LineupsCommand, ModeArg, PlayersArgs};
use crate::summary::{
    print_cache, print_edit, print_lineup, print_players, print_saved_lineups,
};
use crate::types::{BuildReport, EditReport, PlayerListing};

fn player_cache(settings: &Settings) -> JsonPlayerCache {
    JsonPlayerCache::new(&settings.storage.players_cache_path)
}

fn repository(settings: &Settings) -> JsonFileRepository {
    JsonFileRepository::new(&settings.storage.lineups_path)
}

fn resolve_mode(arg: Option<ModeArg>, settings: &Settings) -> ContestMode {
    arg.map_or(settings.contest.default_mode, ContestMode::from)
}

pub fn run_players(args: &PlayersArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("players", file = %args.salaries.display());
    let _guard = span.enter();

    let pool = load_player_pool(&args.sources(), &player_cache(settings))?;
    let mode = pool.contest_mode(args.mode.map(ContestMode::from), settings.contest.default_mode);
    let filter = PlayerFilter {
        position: args.position.into(),
        search: args.search.clone(),
        limit: args.limit.unwrap_or(settings.players.limit),
    };
    let shown = filter_players(&pool.players, &empty_lineup(mode), mode, &filter);
    info!(total = pool.players.len(), shown = shown.len(), "filtered players");

    print_players(&PlayerListing { mode, pool, shown });
    Ok(())
}

pub fn run_build(args: &BuildArgs, settings: &Settings) -> Result<BuildReport> {
    let span = info_span!("build");
    let _guard = span.enter();

    let pool = load_player_pool(&args.sources(), &player_cache(settings))?;
    let mode = pool.contest_mode(args.mode.map(ContestMode::from), settings.contest.default_mode);
    let assembly = assemble_lineup(&pool.players, mode, &args.picks);

    let saved = if args.save && assembly.validation.valid {
        let lineup = SavedLineup::from_lineup(&args.title, &assembly.state, mode);
        Some(repository(settings).save(lineup).context("save lineup")?)
    } else {
        None
    };

    Ok(BuildReport {
        pool,
        assembly,
        save_requested: args.save,
        saved,
    })
}

fn run_edit(args: &EditArgs, settings: &Settings) -> Result<EditReport> {
    let pool = if args.picks.is_empty() {
        None
    } else {
        Some(load_player_pool(&args.sources(), &player_cache(settings))?)
    };
    let players = pool.as_ref().map_or(&[][..], |pool| pool.players.as_slice());
    let edit = LineupEdit {
        drop_slots: &args.drop_slots,
        picks: &args.picks,
        title: args.title.as_deref(),
    };
    let outcome = edit_saved_lineup(
        &mut repository(settings),
        args.id,
        resolve_mode(args.mode, settings),
        players,
        &edit,
    )?;
    Ok(EditReport { pool, outcome })
}

pub fn run_lineups(command: &LineupsCommand, settings: &Settings) -> Result<()> {
    let mut repo = repository(settings);
    match command {
        LineupsCommand::List { mode } => {
            let mode = mode.map(ContestMode::from);
            let lineups: Vec<StoredLineup> = repo
                .list()
                .context("list lineups")?
                .into_iter()
                .filter(|stored| mode.is_none_or(|mode| stored.mode() == mode))
                .collect();
            print_saved_lineups(&lineups);
        }
        LineupsCommand::Show { id, mode } => {
            let stored = repo
                .get(*id, resolve_mode(*mode, settings))
                .context("load lineup")?;
            let state = stored.lineup.to_lineup_state();
            let validation = validate_lineup(&state, stored.mode());
            print_lineup(&stored, &state, &validation);
        }
        LineupsCommand::Edit(args) => {
            let report = run_edit(args, settings)?;
            print_edit(&report);
            if report.outcome.updated.is_none() {
                bail!("lineup {} was left unchanged", args.id);
            }
        }
        LineupsCommand::Delete { id, mode } => {
            let mode = resolve_mode(*mode, settings);
            repo.delete(*id, mode).context("delete lineup")?;
            println!("Deleted {mode} lineup {id}");
        }
    }
    Ok(())
}

pub fn run_cache(command: &CacheCommand, settings: &Settings) -> Result<()> {
    let cache = player_cache(settings);
    match command {
        CacheCommand::Show => {
            let metadata = cache.metadata().context("read player cache")?;
            print_cache(cache.path(), metadata.as_ref());
        }
        CacheCommand::Clear => {
            if cache.clear().context("clear player cache")? {
                println!("Cleared player cache at {}", cache.path().display());
            } else {
                println!("No player cache to clear.");
            }
        }
    }
    Ok(())
}
