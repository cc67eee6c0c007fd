//! Integration tests for pool loading and lineup assembly.

use std::fs;
use std::path::{Path, PathBuf};

use dfs_cli::picks::PickSpec;
use dfs_cli::pipeline::{
    LineupEdit, PickOutcome, PoolOrigin, PoolSources, assemble_lineup, edit_saved_lineup,
    load_player_pool,
};
use dfs_model::ContestMode;
use dfs_persistence::{
    JsonFileRepository, JsonPlayerCache, LineupRepository, PlayerCacheStore, SavedLineup,
};
use tempfile::{TempDir, tempdir};

const CLASSIC_SALARIES: &str = "\
Name,Position,TeamAbbrev,Salary,Game Info
Patrick Mahomes,QB,KC,8000,BUF@KC 01/21/2024 06:30PM ET
Josh Allen,QB,BUF,8300,BUF@KC 01/21/2024 06:30PM ET
Isiah Pacheco,RB,KC,6000,BUF@KC 01/21/2024 06:30PM ET
James Cook,RB,BUF,6500,BUF@KC 01/21/2024 06:30PM ET
Travis Kelce,TE,KC,6000,BUF@KC 01/21/2024 06:30PM ET
Stefon Diggs,WR,BUF,7500,BUF@KC 01/21/2024 06:30PM ET
Rashee Rice,WR,KC,5500,BUF@KC 01/21/2024 06:30PM ET
Khalil Shakir,WR,BUF,4000,BUF@KC 01/21/2024 06:30PM ET
Dalton Kincaid,TE,BUF,3500,BUF@KC 01/21/2024 06:30PM ET
Chiefs,DST,KC,3000,BUF@KC 01/21/2024 06:30PM ET
Bills,DST,BUF,3200,BUF@KC 01/21/2024 06:30PM ET
";

const OWNERSHIP_TEXT: &str = "\
Patrick Mahomes 22.5%
Travis Kelce, 18%
Kansas City Defense - 5%
";

struct Fixture {
    dir: TempDir,
    salaries: PathBuf,
    cache: JsonPlayerCache,
}

fn fixture(salaries: &str) -> Fixture {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("DKSalaries.csv");
    fs::write(&path, salaries).expect("write salaries");
    let cache = JsonPlayerCache::new(dir.path().join("cache").join("players.json"));
    Fixture {
        salaries: path,
        cache,
        dir,
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn picks(specs: &[&str]) -> Vec<PickSpec> {
    specs
        .iter()
        .map(|spec| spec.parse().expect("pick spec"))
        .collect()
}

#[test]
fn builds_a_valid_classic_lineup_with_ownership() {
    let fx = fixture(CLASSIC_SALARIES);
    let sources = PoolSources {
        salaries: Some(fx.salaries.clone()),
        ownership_text: Some(write(fx.dir.path(), "own.txt", OWNERSHIP_TEXT)),
        ..PoolSources::default()
    };
    let pool = load_player_pool(&sources, &fx.cache).expect("load pool");
    assert_eq!(pool.players.len(), 11);
    assert_eq!(pool.file_name, "DKSalaries.csv");
    assert!(matches!(pool.origin, PoolOrigin::Parsed { rejected: 0, .. }));
    let ownership = pool.ownership.as_ref().expect("ownership applied");
    assert_eq!(ownership.matched, 3);

    let mode = pool.contest_mode(None, ContestMode::Classic);
    assert_eq!(mode, ContestMode::Classic);

    let assembly = assemble_lineup(
        &pool.players,
        mode,
        &picks(&[
            "Patrick Mahomes",
            "Josh Allen",
            "Isiah Pacheco",
            "James Cook",
            "Travis Kelce",
            "Stefon Diggs",
            "Rashee Rice",
            "Khalil Shakir",
            "Dalton Kincaid",
            "Chiefs:KC",
        ]),
    );

    let rejected: Vec<&PickOutcome> = assembly.rejected().collect();
    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        rejected[0],
        PickOutcome::Rejected { pick, .. } if pick.name == "Josh Allen"
    ));
    assert!(assembly.state.is_full());
    assert!(assembly.validation.valid, "{:?}", assembly.validation);
    assert_eq!(assembly.validation.total_salary, 50_000);

    let kincaid = assembly
        .outcomes
        .iter()
        .find_map(|outcome| match outcome {
            PickOutcome::Placed { player, slot, .. } if player == "Dalton Kincaid" => Some(*slot),
            _ => None,
        })
        .expect("kincaid placed");
    assert_eq!(kincaid, 7, "second tight end lands in FLEX");

    let chiefs = assembly.state.get(8).expect("dst filled");
    assert_eq!(chiefs.player.ownership, Some(5.0));
}

#[test]
fn unknown_picks_are_reported_not_fatal() {
    let fx = fixture(CLASSIC_SALARIES);
    let sources = PoolSources {
        salaries: Some(fx.salaries.clone()),
        ..PoolSources::default()
    };
    let pool = load_player_pool(&sources, &fx.cache).expect("load pool");
    let assembly = assemble_lineup(
        &pool.players,
        ContestMode::Classic,
        &picks(&["Tom Brady", "Patrick Mahomes"]),
    );
    assert_eq!(assembly.state.filled_count(), 1);
    assert!(matches!(
        &assembly.outcomes[0],
        PickOutcome::Rejected { reason, .. } if reason.contains("Tom Brady")
    ));
    assert!(!assembly.validation.valid);
    assert_eq!(
        assembly.validation.violations[0],
        "Lineup must have exactly 9 players."
    );
}

#[test]
fn cached_pool_is_reused_until_the_salary_file_changes() {
    let fx = fixture(CLASSIC_SALARIES);
    let with_file = PoolSources {
        salaries: Some(fx.salaries.clone()),
        ..PoolSources::default()
    };

    let first = load_player_pool(&with_file, &fx.cache).expect("parse");
    assert!(matches!(first.origin, PoolOrigin::Parsed { .. }));

    let again = load_player_pool(&with_file, &fx.cache).expect("reuse");
    assert_eq!(again.origin, PoolOrigin::Cached);
    assert_eq!(again.players, first.players);

    let cache_only = load_player_pool(&PoolSources::default(), &fx.cache).expect("cache only");
    assert_eq!(cache_only.origin, PoolOrigin::Cached);
    assert_eq!(cache_only.players.len(), 11);

    let trimmed: String = CLASSIC_SALARIES.lines().take(3).collect::<Vec<_>>().join("\n");
    fs::write(&fx.salaries, trimmed).expect("rewrite salaries");
    let reparsed = load_player_pool(&with_file, &fx.cache).expect("reparse");
    assert!(matches!(reparsed.origin, PoolOrigin::Parsed { .. }));
    assert_eq!(reparsed.players.len(), 2);

    assert!(fx.cache.clear().expect("clear"));
    let err = load_player_pool(&PoolSources::default(), &fx.cache).unwrap_err();
    assert!(err.to_string().contains("no cached player pool"));
}

#[test]
fn unrecognized_feed_names_the_columns_it_saw() {
    let fx = fixture("Athlete,Slot\nPatrick Mahomes,QB\n");
    let sources = PoolSources {
        salaries: Some(fx.salaries.clone()),
        ..PoolSources::default()
    };
    let err = load_player_pool(&sources, &fx.cache).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0 players parsed"), "{message}");
    assert!(message.contains("Athlete, Slot"), "{message}");
    assert!(fx.cache.load().expect("load").is_none());
}

#[test]
fn showdown_feed_selects_showdown_mode() {
    let salaries = "\
Position,Name + ID,Name,Roster Position,Salary,TeamAbbrev
QB,Patrick Mahomes (1),Patrick Mahomes,CPT,15000,KC
QB,Patrick Mahomes (2),Patrick Mahomes,FLEX,10000,KC
WR,Stefon Diggs (3),Stefon Diggs,CPT,12000,BUF
WR,Stefon Diggs (4),Stefon Diggs,FLEX,8000,BUF
TE,Travis Kelce (5),Travis Kelce,FLEX,7000,KC
RB,James Cook (6),James Cook,FLEX,6000,BUF
WR,Rashee Rice (7),Rashee Rice,FLEX,5000,KC
DST,Bills (8),Bills,FLEX,4000,BUF
";
    let fx = fixture(salaries);
    let sources = PoolSources {
        salaries: Some(fx.salaries.clone()),
        ..PoolSources::default()
    };
    let pool = load_player_pool(&sources, &fx.cache).expect("load pool");
    assert!(matches!(
        pool.origin,
        PoolOrigin::Parsed {
            duplicates_collapsed: 2,
            ..
        }
    ));
    assert!(pool.looks_like_showdown());
    let mode = pool.contest_mode(None, ContestMode::Classic);
    assert_eq!(mode, ContestMode::Showdown);
    assert_eq!(
        pool.contest_mode(Some(ContestMode::Classic), ContestMode::Showdown),
        ContestMode::Classic
    );

    let assembly = assemble_lineup(
        &pool.players,
        mode,
        &picks(&[
            "Patrick Mahomes@CPT",
            "Stefon Diggs",
            "Travis Kelce",
            "James Cook",
            "Rashee Rice",
            "Bills",
        ]),
    );
    assert!(assembly.rejected().next().is_none());
    let captain = assembly.state.get(0).expect("captain");
    assert!(captain.is_captain);
    assert_eq!(captain.player.name, "Patrick Mahomes");
    // 10,000 x 1.5 + 8,000 + 7,000 + 6,000 + 5,000 + 4,000
    assert_eq!(assembly.validation.total_salary, 45_000);
    assert!(assembly.validation.valid, "{:?}", assembly.validation);
}

#[test]
fn editing_a_saved_lineup_keeps_its_id_and_creation_time() {
    let salaries = format!(
        "{CLASSIC_SALARIES}Mack Hollins,WR,BUF,3000,BUF@KC 01/21/2024 06:30PM ET\n"
    );
    let fx = fixture(&salaries);
    let sources = PoolSources {
        salaries: Some(fx.salaries.clone()),
        ..PoolSources::default()
    };
    let pool = load_player_pool(&sources, &fx.cache).expect("load pool");
    let mode = ContestMode::Classic;
    let built = assemble_lineup(
        &pool.players,
        mode,
        &picks(&[
            "Patrick Mahomes",
            "Isiah Pacheco",
            "James Cook",
            "Travis Kelce",
            "Stefon Diggs",
            "Rashee Rice",
            "Khalil Shakir",
            "Dalton Kincaid",
            "Chiefs:KC",
        ]),
    );
    assert!(built.validation.valid, "{:?}", built.validation);

    let mut repo = JsonFileRepository::new(fx.dir.path().join("lineups.json"));
    let saved = repo
        .save(SavedLineup::from_lineup("Main", &built.state, mode))
        .expect("save");

    // Bills cost 200 more than the cap space Chiefs leave behind.
    let swap = picks(&["Bills:BUF"]);
    let rejected = edit_saved_lineup(
        &mut repo,
        saved.id,
        mode,
        &pool.players,
        &LineupEdit {
            drop_slots: &[9],
            picks: &swap,
            title: None,
        },
    )
    .expect("edit");
    assert!(rejected.updated.is_none());
    assert_eq!(rejected.assembly.rejected().count(), 1);
    assert_eq!(rejected.assembly.validation.total_salary, 47_000);
    let unchanged = repo.get(saved.id, mode).expect("get");
    assert_eq!(unchanged.lineup.total_salary, 50_000);
    assert_eq!(unchanged.updated_at, saved.updated_at);

    let err = edit_saved_lineup(
        &mut repo,
        saved.id,
        mode,
        &pool.players,
        &LineupEdit {
            drop_slots: &[10],
            ..LineupEdit::default()
        },
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("clear slot 10"), "{err:#}");

    let swap = picks(&["Mack Hollins", "Bills:BUF"]);
    let edited = edit_saved_lineup(
        &mut repo,
        saved.id,
        mode,
        &pool.players,
        &LineupEdit {
            drop_slots: &[6, 9],
            picks: &swap,
            title: Some("Main v2"),
        },
    )
    .expect("edit");
    let updated = edited.updated.expect("valid edit is written back");
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.created_at, saved.created_at);
    assert!(updated.updated_at >= saved.updated_at);
    assert_eq!(updated.lineup.title, "Main v2");
    assert_eq!(updated.lineup.total_salary, 49_200);

    let reloaded = JsonFileRepository::new(fx.dir.path().join("lineups.json"));
    let state = reloaded
        .get(saved.id, mode)
        .expect("reload")
        .lineup
        .to_lineup_state();
    assert_eq!(state.get(5).expect("wr3").player.name, "Mack Hollins");
    assert_eq!(state.get(8).expect("dst").player.name, "Bills");
    assert_eq!(reloaded.list().expect("list").len(), 1);
}

#[test]
fn editing_a_missing_lineup_fails() {
    let fx = fixture(CLASSIC_SALARIES);
    let mut repo = JsonFileRepository::new(fx.dir.path().join("lineups.json"));
    let err = edit_saved_lineup(
        &mut repo,
        7,
        ContestMode::Showdown,
        &[],
        &LineupEdit::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("load lineup"), "{err:#}");
}
