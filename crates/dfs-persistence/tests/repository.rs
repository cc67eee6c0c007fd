//! Repository behaviour, shared across the in-memory and JSON file stores.

use std::fs;

use dfs_model::{ContestMode, LineupState, PlayerRecord, Position, SlotEntry};
use dfs_persistence::{
    JsonFileRepository, JsonPlayerCache, LineupRepository, MemoryRepository, PersistenceError,
    PlayerCache, PlayerCacheStore, SavedLineup, compute_file_hash,
};
use tempfile::tempdir;

fn showdown_lineup(title: &str, ownership: [f64; 6]) -> SavedLineup {
    let slots: Vec<Option<SlotEntry>> = ownership
        .iter()
        .enumerate()
        .map(|(idx, own)| {
            let team = if idx % 2 == 0 { "KC" } else { "BUF" };
            let player = PlayerRecord::new(format!("Player {idx}"), Position::Wr, team, 5000)
                .with_ownership(*own);
            Some(if idx == 0 {
                SlotEntry::captain(player)
            } else {
                SlotEntry::new(player)
            })
        })
        .collect();
    SavedLineup::from_lineup(title, &LineupState::from_slots(slots), ContestMode::Showdown)
}

fn exercise(repo: &mut dyn LineupRepository) {
    let first = repo
        .save(showdown_lineup("First", [10.0, 5.5, 1.25, 0.0, 3.0, 2.0]))
        .expect("save first");
    assert_eq!(first.id, 1);
    assert_eq!(first.lineup.total_salary, 32_500);
    assert_eq!(first.total_ownership, 21.75);
    assert_eq!(first.created_at, first.updated_at);

    let second = repo
        .save(showdown_lineup("Second", [0.333; 6]))
        .expect("save second");
    assert_eq!(second.id, 2);
    assert_eq!(second.total_ownership, 2.0);

    let listed: Vec<u64> = repo.list().expect("list").iter().map(|s| s.id).collect();
    assert_eq!(listed, vec![2, 1]);

    let updated = repo
        .update(1, showdown_lineup("First v2", [1.0; 6]))
        .expect("update");
    assert_eq!(updated.id, 1);
    assert_eq!(updated.lineup.title, "First v2");
    assert_eq!(updated.created_at, first.created_at);
    assert!(updated.updated_at >= first.updated_at);
    assert_eq!(
        repo.get(1, ContestMode::Showdown).expect("get").lineup.title,
        "First v2"
    );

    assert!(matches!(
        repo.get(1, ContestMode::Classic),
        Err(PersistenceError::NotFound { id: 1, .. })
    ));
    assert!(matches!(
        repo.update(9, showdown_lineup("nope", [0.0; 6])),
        Err(PersistenceError::NotFound { id: 9, .. })
    ));

    repo.delete(2, ContestMode::Showdown).expect("delete");
    assert!(matches!(
        repo.delete(2, ContestMode::Showdown),
        Err(PersistenceError::NotFound { .. })
    ));
    assert_eq!(repo.list().expect("list").len(), 1);
}

#[test]
fn memory_repository_round_trip() {
    let mut repo = MemoryRepository::new();
    exercise(&mut repo);
}

#[test]
fn json_repository_round_trip_and_reopen() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("store").join("lineups.json");
    let mut repo = JsonFileRepository::new(&path);
    assert!(repo.list().expect("empty list").is_empty());

    exercise(&mut repo);
    assert!(path.exists());

    let reopened = JsonFileRepository::new(&path);
    let stored = reopened.get(1, ContestMode::Showdown).expect("reopen");
    let state = stored.lineup.to_lineup_state();
    assert!(state.get(0).expect("captain").is_captain);
    assert!(state.is_full());

    let raw = fs::read_to_string(&path).expect("read");
    assert!(raw.contains("\"contestMode\": \"SHOWDOWN\""));
    assert!(raw.contains("\"isCaptain\": true"));
}

#[test]
fn ids_are_scoped_per_mode() {
    let mut repo = MemoryRepository::new();
    repo.save(showdown_lineup("sd", [0.0; 6])).expect("save");

    let classic: Vec<Option<SlotEntry>> = (0..9)
        .map(|idx| {
            Some(SlotEntry::new(PlayerRecord::new(
                format!("C{idx}"),
                Position::Wr,
                "NYJ",
                1000,
            )))
        })
        .collect();
    let saved = SavedLineup::from_lineup(
        "classic",
        &LineupState::from_slots(classic),
        ContestMode::Classic,
    );
    let stored = repo.save(saved).expect("save classic");
    assert_eq!(stored.id, 1);
    assert!(repo.get(1, ContestMode::Classic).is_ok());
    assert!(repo.get(1, ContestMode::Showdown).is_ok());
}

#[test]
fn incomplete_lineups_are_rejected() {
    let mut repo = MemoryRepository::new();
    let partial = SavedLineup::from_lineup("", &LineupState::empty(6), ContestMode::Showdown);
    let err = repo.save(partial).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::InvalidRequest(ref reason) if reason == "slots[0].player.name is required"
    ));
    assert!(repo.list().expect("list").is_empty());
}

#[test]
fn corrupt_store_surfaces_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("lineups.json");
    fs::write(&path, "[oops").expect("write");
    let repo = JsonFileRepository::new(&path);
    let err = repo.list().unwrap_err();
    assert!(matches!(err, PersistenceError::Deserialization { .. }));
    assert!(err.suggestion().is_some());
}

#[test]
fn player_cache_store_load_clear() {
    let dir = tempdir().expect("temp dir");
    let salaries = dir.path().join("DKSalaries.csv");
    fs::write(&salaries, "Name,Position\nA,QB\n").expect("write csv");

    let store = JsonPlayerCache::new(dir.path().join("players.json"));
    assert!(store.load().expect("load").is_none());
    assert!(store.metadata().expect("metadata").is_none());

    let players = vec![
        PlayerRecord::new("Josh Allen", Position::Qb, "BUF", 8300),
        PlayerRecord::new("Bills", Position::Dst, "BUF", 3000),
    ];
    let cache = PlayerCache::new(players.clone(), "DKSalaries.csv")
        .with_source_hash(compute_file_hash(&salaries).expect("hash"));
    store.store(&cache).expect("store");

    let loaded = store.load().expect("load").expect("present");
    assert_eq!(loaded.players, players);
    assert!(loaded.matches_source(&salaries).expect("verify"));

    let meta = store.metadata().expect("metadata").expect("present");
    assert_eq!(meta.file_name, "DKSalaries.csv");
    assert_eq!(meta.player_count, 2);

    fs::write(&salaries, "Name,Position\nB,RB\n").expect("rewrite csv");
    assert!(!loaded.matches_source(&salaries).expect("verify"));

    assert!(store.clear().expect("clear"));
    assert!(!store.clear().expect("clear again"));
    assert!(store.load().expect("load").is_none());
}
