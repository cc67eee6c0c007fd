use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dfs_cli::pipeline::{PickOutcome, PlayerPool, PoolOrigin};
use dfs_lineup::{
    lineup_ownership, remaining_per_slot, remaining_salary, salary_used, slot_cost,
};
use dfs_model::{ContestMode, LineupState, ValidationResult};
use dfs_persistence::{PlayerCacheMetadata, StoredLineup, round_ownership};
use dfs_standards::{SALARY_CAP, template_for};
use dfs_validate::group_thousands;

use crate::types::{BuildReport, EditReport, PlayerListing};

pub fn print_players(listing: &PlayerListing) {
    print_pool(&listing.pool, listing.mode);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Player"),
        header_cell("Pos"),
        header_cell("Team"),
        header_cell("Opp"),
        header_cell("Salary"),
        header_cell("Own%"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for player in &listing.shown {
        table.add_row(vec![
            Cell::new(&player.name),
            Cell::new(player.position.as_str()),
            Cell::new(&player.team),
            optional_cell(player.opponent.as_deref()),
            Cell::new(group_thousands(i64::from(player.salary))),
            ownership_cell(player.ownership),
        ]);
    }
    println!("{table}");
    println!(
        "Showing {} of {} players",
        listing.shown.len(),
        listing.pool.players.len()
    );
}

pub fn print_build(report: &BuildReport) {
    let assembly = &report.assembly;
    print_pool(&report.pool, assembly.mode);
    if assembly.rejected().next().is_some() {
        print_pick_outcomes(&assembly.outcomes);
    }
    println!("{}", lineup_table(&assembly.state, assembly.mode));
    print_totals(&assembly.state);
    print_validation(&assembly.validation);
    match &report.saved {
        Some(stored) => println!("Saved {} lineup {}", stored.mode(), stored.id),
        None if report.save_requested => println!("Lineup not saved: it is not valid."),
        None => {}
    }
}

pub fn print_edit(report: &EditReport) {
    let outcome = &report.outcome;
    let assembly = &outcome.assembly;
    if let Some(pool) = &report.pool {
        print_pool(pool, assembly.mode);
    }
    println!(
        "Editing {} lineup {}: {}",
        assembly.mode, outcome.previous.id, outcome.previous.lineup.title
    );
    if !assembly.outcomes.is_empty() {
        print_pick_outcomes(&assembly.outcomes);
    }
    println!("{}", lineup_table(&assembly.state, assembly.mode));
    print_totals(&assembly.state);
    print_validation(&assembly.validation);
    match &outcome.updated {
        Some(stored) => println!(
            "Updated {} lineup {} at {}",
            stored.mode(),
            stored.id,
            stored.updated_at.format("%Y-%m-%d %H:%M")
        ),
        None => println!("Lineup not updated: it is not valid."),
    }
}

pub fn print_lineup(stored: &StoredLineup, state: &LineupState, validation: &ValidationResult) {
    println!(
        "{} lineup {}: {}",
        stored.mode(),
        stored.id,
        stored.lineup.title
    );
    println!(
        "Saved: {}  Updated: {}",
        stored.created_at.format("%Y-%m-%d %H:%M"),
        stored.updated_at.format("%Y-%m-%d %H:%M")
    );
    println!("{}", lineup_table(state, stored.mode()));
    print_totals(state);
    print_validation(validation);
}

pub fn print_saved_lineups(lineups: &[StoredLineup]) {
    if lineups.is_empty() {
        println!("No saved lineups.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Mode"),
        header_cell("Title"),
        header_cell("Salary"),
        header_cell("Own%"),
        header_cell("Updated"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for stored in lineups {
        table.add_row(vec![
            Cell::new(stored.id),
            Cell::new(stored.mode()),
            Cell::new(&stored.lineup.title),
            Cell::new(group_thousands(stored.lineup.total_salary)),
            Cell::new(format!("{:.2}", stored.total_ownership)),
            dim_cell(stored.updated_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("{table}");
}

pub fn print_cache(path: &Path, metadata: Option<&PlayerCacheMetadata>) {
    let Some(metadata) = metadata else {
        println!("No cached player pool at {}", path.display());
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Path"), Cell::new(path.display())]);
    table.add_row(vec![Cell::new("Source file"), Cell::new(&metadata.file_name)]);
    table.add_row(vec![Cell::new("Players"), Cell::new(metadata.player_count)]);
    table.add_row(vec![
        Cell::new("Cached at"),
        Cell::new(metadata.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
    ]);
    println!("{table}");
}

fn print_pool(pool: &PlayerPool, mode: ContestMode) {
    match &pool.origin {
        PoolOrigin::Parsed {
            rows,
            rejected,
            duplicates_collapsed,
        } => {
            println!(
                "Salaries: {} ({} rows, {} players, {} dropped)",
                pool.file_name,
                rows,
                pool.players.len(),
                rejected
            );
            if *duplicates_collapsed > 0 {
                println!("Showdown rows merged: {duplicates_collapsed}");
            }
        }
        PoolOrigin::Cached => println!(
            "Salaries: {} (cached, {} players)",
            pool.file_name,
            pool.players.len()
        ),
    }
    if let Some(ownership) = &pool.ownership {
        println!(
            "Ownership: {} entries, matched {} of {} players",
            ownership.entries,
            ownership.matched,
            pool.players.len()
        );
    }
    println!("Mode: {mode}");
}

fn print_pick_outcomes(outcomes: &[PickOutcome]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Pick"), header_cell("Result")]);
    apply_table_style(&mut table);
    for outcome in outcomes {
        let row = match outcome {
            PickOutcome::Placed { pick, player, slot } => vec![
                Cell::new(pick),
                Cell::new(format!("{player} -> slot {}", slot + 1)).fg(Color::Green),
            ],
            PickOutcome::Rejected { pick, reason } => {
                vec![Cell::new(pick), Cell::new(reason).fg(Color::Red)]
            }
        };
        table.add_row(row);
    }
    println!("{table}");
}

fn lineup_table(state: &LineupState, mode: ContestMode) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Slot"),
        header_cell("Player"),
        header_cell("Pos"),
        header_cell("Team"),
        header_cell("Salary"),
        header_cell("Own%"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for (idx, spec) in template_for(mode).iter().enumerate() {
        let number = dim_cell(idx + 1);
        let slot = Cell::new(spec.label).add_attribute(Attribute::Bold);
        let row = match state.get(idx) {
            Some(entry) => vec![
                number,
                slot,
                Cell::new(&entry.player.name),
                Cell::new(entry.player.position.as_str()),
                Cell::new(&entry.player.team),
                Cell::new(group_thousands(slot_cost(entry))),
                ownership_cell(entry.player.ownership),
            ],
            None => vec![
                number,
                slot,
                dim_cell("open"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ],
        };
        table.add_row(row);
    }
    table
}

fn print_totals(state: &LineupState) {
    println!(
        "Salary: {} / {} ({} remaining)",
        group_thousands(salary_used(state)),
        group_thousands(SALARY_CAP),
        group_thousands(remaining_salary(state))
    );
    match remaining_per_slot(state) {
        Some(per_slot) => println!(
            "Per open slot: {} ({} slots left)",
            group_thousands(per_slot),
            state.len() - state.filled_count()
        ),
        None => println!("Per open slot: 0 (complete)"),
    }
    println!(
        "Ownership: {:.2}%",
        round_ownership(lineup_ownership(state))
    );
}

fn print_validation(validation: &ValidationResult) {
    if validation.valid {
        println!("Lineup is valid.");
        return;
    }
    println!("Lineup is invalid:");
    for violation in &validation.violations {
        println!("  - {violation}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn ownership_cell(ownership: Option<f64>) -> Cell {
    match ownership {
        Some(value) => Cell::new(format!("{value:.1}")),
        None => dim_cell("-"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
