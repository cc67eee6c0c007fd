//! Integration tests for salary feed normalization.

use std::fs;

use dfs_ingest::{FeedRow, RejectReason, RowOutcome, normalize_players, read_csv_rows};
use dfs_model::{PlayerRecord, Position};
use proptest::prelude::*;

fn draftkings_row(name: &str, position: &str, team: &str, salary: &str) -> FeedRow {
    FeedRow::from_pairs([
        ("Name", name),
        ("Position", position),
        ("TeamAbbrev", team),
        ("Salary", salary),
    ])
}

#[test]
fn normalizes_a_plain_row() {
    let feed = normalize_players(&[draftkings_row("Patrick Mahomes", "QB", "KC", "$8,200")]);
    assert_eq!(feed.players.len(), 1);
    let player = &feed.players[0];
    assert_eq!(player.name, "Patrick Mahomes");
    assert_eq!(player.position, Position::Qb);
    assert_eq!(player.team, "KC");
    assert_eq!(player.salary, 8200);
    assert_eq!(player.ownership, None);
}

#[test]
fn collapses_showdown_captain_rows_to_base_salary() {
    let rows = vec![
        FeedRow::from_pairs([
            ("Position", "RB"),
            ("Name + ID", "Christian McCaffrey (28991)"),
            ("Name", "Christian McCaffrey"),
            ("Roster Position", "CPT"),
            ("Salary", "11000"),
            ("TeamAbbrev", "SF"),
        ]),
        FeedRow::from_pairs([
            ("Position", "RB"),
            ("Name + ID", "Christian McCaffrey (28990)"),
            ("Name", "Christian McCaffrey"),
            ("Roster Position", "FLEX"),
            ("Salary", "7333"),
            ("TeamAbbrev", "SF"),
        ]),
        FeedRow::from_pairs([
            ("Position", "WR"),
            ("Name + ID", "Deebo Samuel (28993)"),
            ("Name", "Deebo Samuel"),
            ("Roster Position", "FLEX"),
            ("Salary", "6400"),
            ("TeamAbbrev", "SF"),
        ]),
    ];
    let feed = normalize_players(&rows);
    assert!(feed.showdown_detected);
    assert_eq!(feed.duplicates_collapsed, 1);
    let names: Vec<&str> = feed.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Christian McCaffrey", "Deebo Samuel"]);
    assert_eq!(feed.players[0].salary, 7333);
    assert_eq!(feed.players[0].roster_position, "FLEX");
}

#[test]
fn classic_feed_keeps_same_named_players_on_other_teams() {
    let rows = vec![
        draftkings_row("Mike Williams", "WR", "NYJ", "4000"),
        draftkings_row("Mike Williams", "WR", "PIT", "3800"),
    ];
    let feed = normalize_players(&rows);
    assert!(!feed.showdown_detected);
    assert_eq!(feed.players.len(), 2);
}

#[test]
fn combined_name_id_column_is_used_when_no_name_column() {
    let rows = vec![FeedRow::from_pairs([
        ("Name + ID", "Justin Jefferson (id: 30114)"),
        ("Pos", "WR"),
        ("Team", "min"),
        ("Cost", "9100"),
        ("Game Info", "MIN@DET 12/29/2024 08:20PM ET"),
    ])];
    let feed = normalize_players(&rows);
    let player = &feed.players[0];
    assert_eq!(player.name, "Justin Jefferson");
    assert_eq!(player.team, "MIN");
    assert_eq!(player.opponent.as_deref(), Some("@DET"));
}

#[test]
fn mixed_feed_reports_outcomes_per_row() {
    let rows = vec![
        draftkings_row("Josh Allen", "QB", "BUF", "8300"),
        draftkings_row("", "QB", "BUF", "8300"),
        FeedRow::from_pairs([("Player", "Nobody"), ("Salary", "100")]),
    ];
    let feed = normalize_players(&rows);
    assert_eq!(feed.players.len(), 1);
    assert_eq!(
        feed.outcomes[1],
        RowOutcome::Rejected(RejectReason::EmptyName)
    );
    assert_eq!(
        feed.outcomes[2],
        RowOutcome::Rejected(RejectReason::MissingPositionColumn)
    );
    assert_eq!(feed.last_headers, vec!["Player", "Salary"]);
    assert_eq!(feed.diagnostic(), None);
}

#[test]
fn reads_and_normalizes_a_salary_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("DKSalaries.csv");
    let contents = "Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame\n\
                    QB,Lamar Jackson (1),Lamar Jackson,1,QB,8000,BAL@PIT 12/21/2024 04:30PM ET,BAL,25.1\n\
                    DST,Steelers (2),Steelers ,2,DST,3000,BAL@PIT 12/21/2024 04:30PM ET,PIT,7.2\n";
    fs::write(&path, contents).expect("write csv");

    let rows = read_csv_rows(&path).expect("read csv");
    let feed = normalize_players(&rows);
    assert_eq!(feed.players.len(), 2);
    assert_eq!(feed.players[0].opponent.as_deref(), Some("@PIT"));
    assert_eq!(feed.players[1].name, "Steelers");
    assert_eq!(feed.players[1].position, Position::Dst);
    assert_eq!(feed.players[1].opponent.as_deref(), Some("vs BAL"));
}

fn arb_row() -> impl Strategy<Value = FeedRow> {
    (
        "[A-Za-z .']{0,12}",
        prop::sample::select(vec!["QB", "RB", "WR/FLEX", "TE", "DST", "CPT", ""]),
        prop::sample::select(vec!["KC", "buf", "SF", ""]),
        "[$0-9,.]{0,6}",
        prop::sample::select(vec!["", "FLEX", "CPT"]),
    )
        .prop_map(|(name, position, team, salary, roster)| {
            FeedRow::from_pairs([
                ("Name", name),
                ("Position", position.to_string()),
                ("TeamAbbrev", team.to_string()),
                ("Salary", salary),
                ("Roster Position", roster.to_string()),
            ])
        })
}

proptest! {
    /// Normalizing the same rows twice produces identical output.
    #[test]
    fn normalization_is_deterministic(rows in prop::collection::vec(arb_row(), 0..20)) {
        let first = normalize_players(&rows);
        let second = normalize_players(&rows);
        prop_assert_eq!(&first.players, &second.players);
        prop_assert_eq!(first.outcomes, second.outcomes);
    }

    /// Showdown collapsing never leaves two records with the same key.
    #[test]
    fn showdown_output_has_unique_keys(rows in prop::collection::vec(arb_row(), 0..20)) {
        let feed = normalize_players(&rows);
        if feed.showdown_detected {
            let mut keys: Vec<_> = feed.players.iter().map(PlayerRecord::key).collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), total);
        }
    }
}
