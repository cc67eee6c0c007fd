//! CLI argument definitions for the lineup builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dfs_lineup::PositionFilter;
use dfs_model::ContestMode;
use dfs_persistence::LineupId;

use dfs_cli::picks::PickSpec;
use dfs_cli::pipeline::PoolSources;

#[derive(Parser)]
#[command(
    name = "dfs",
    version,
    about = "Build salary-capped fantasy football lineups",
    long_about = "Build classic and showdown lineups from a salary export.\n\n\
                  Ownership projections can be merged in from a CSV export or\n\
                  pasted text, and finished lineups are saved locally."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: ./dfs.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the player pool from a salary export.
    Players(PlayersArgs),

    /// Place picks into a lineup, validate it, and optionally save it.
    Build(BuildArgs),

    /// Manage saved lineups.
    #[command(subcommand)]
    Lineups(LineupsCommand),

    /// Inspect or clear the cached player pool.
    #[command(subcommand)]
    Cache(CacheCommand),
}

#[derive(Args)]
pub struct OwnershipArgs {
    /// Ownership export with name and ownership columns.
    #[arg(long = "ownership-csv", value_name = "FILE")]
    pub ownership_csv: Option<PathBuf>,

    /// Pasted ownership text, one `Name 12.5%` entry per line.
    #[arg(long = "ownership-text", value_name = "FILE")]
    pub ownership_text: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PlayersArgs {
    /// Salary export CSV.
    #[arg(value_name = "SALARIES")]
    pub salaries: PathBuf,

    #[command(flatten)]
    pub ownership: OwnershipArgs,

    /// Contest mode (default: detected from the feed, then settings).
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Position filter (classic only).
    #[arg(long = "position", value_enum, default_value = "all")]
    pub position: PositionArg,

    /// Case-insensitive name or team search.
    #[arg(long = "search", default_value = "")]
    pub search: String,

    /// Maximum rows to show (default from settings).
    #[arg(long = "limit")]
    pub limit: Option<usize>,
}

impl PlayersArgs {
    pub fn sources(&self) -> PoolSources {
        pool_sources(Some(self.salaries.clone()), &self.ownership)
    }
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Contest mode (default: detected from the feed, then settings).
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Salary export CSV (default: the cached player pool).
    #[arg(long = "salaries", value_name = "FILE")]
    pub salaries: Option<PathBuf>,

    #[command(flatten)]
    pub ownership: OwnershipArgs,

    /// Player to place, as NAME[:TEAM][@CPT|@FLEX]. Repeat in order.
    #[arg(long = "pick", value_name = "SPEC", required = true)]
    pub picks: Vec<PickSpec>,

    /// Title stored with a saved lineup.
    #[arg(long = "title", default_value = "")]
    pub title: String,

    /// Save the lineup when it is valid.
    #[arg(long = "save")]
    pub save: bool,
}

impl BuildArgs {
    pub fn sources(&self) -> PoolSources {
        pool_sources(self.salaries.clone(), &self.ownership)
    }
}

fn pool_sources(salaries: Option<PathBuf>, ownership: &OwnershipArgs) -> PoolSources {
    PoolSources {
        salaries,
        ownership_csv: ownership.ownership_csv.clone(),
        ownership_text: ownership.ownership_text.clone(),
    }
}

#[derive(Subcommand)]
pub enum LineupsCommand {
    /// List saved lineups, newest first.
    List {
        /// Only lineups of this mode.
        #[arg(long = "mode", value_enum)]
        mode: Option<ModeArg>,
    },

    /// Show one saved lineup with its validation result.
    Show {
        id: LineupId,
        #[arg(long = "mode", value_enum)]
        mode: Option<ModeArg>,
    },

    /// Change a saved lineup in place, keeping its id.
    Edit(EditArgs),

    /// Delete a saved lineup.
    Delete {
        id: LineupId,
        #[arg(long = "mode", value_enum)]
        mode: Option<ModeArg>,
    },
}

#[derive(Args)]
pub struct EditArgs {
    pub id: LineupId,

    /// Contest mode of the saved lineup (default from settings).
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Salary export CSV used to resolve picks (default: the cached player pool).
    #[arg(long = "salaries", value_name = "FILE")]
    pub salaries: Option<PathBuf>,

    #[command(flatten)]
    pub ownership: OwnershipArgs,

    /// Slot to clear before placing picks, numbered as `lineups show` prints them.
    #[arg(long = "drop", value_name = "SLOT")]
    pub drop_slots: Vec<usize>,

    /// Player to place into an open slot, as NAME[:TEAM][@CPT|@FLEX].
    #[arg(long = "pick", value_name = "SPEC")]
    pub picks: Vec<PickSpec>,

    /// Replace the saved title.
    #[arg(long = "title")]
    pub title: Option<String>,
}

impl EditArgs {
    pub fn sources(&self) -> PoolSources {
        pool_sources(self.salaries.clone(), &self.ownership)
    }
}

#[derive(Subcommand)]
pub enum CacheCommand {
    /// Show what the player cache holds.
    Show,
    /// Remove the player cache.
    Clear,
}

/// CLI contest mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Classic,
    Showdown,
}

impl From<ModeArg> for ContestMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Classic => ContestMode::Classic,
            ModeArg::Showdown => ContestMode::Showdown,
        }
    }
}

/// CLI position filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PositionArg {
    All,
    Qb,
    Rb,
    Wr,
    Te,
    Flex,
    Dst,
}

impl From<PositionArg> for PositionFilter {
    fn from(value: PositionArg) -> Self {
        match value {
            PositionArg::All => PositionFilter::All,
            PositionArg::Qb => PositionFilter::Qb,
            PositionArg::Rb => PositionFilter::Rb,
            PositionArg::Wr => PositionFilter::Wr,
            PositionArg::Te => PositionFilter::Te,
            PositionArg::Flex => PositionFilter::Flex,
            PositionArg::Dst => PositionFilter::Dst,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
