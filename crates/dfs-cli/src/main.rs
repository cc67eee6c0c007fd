//! Salary-capped lineup builder CLI.

use clap::{ColorChoice, Parser};
use dfs_cli::logging::{LogConfig, LogFormat, init_logging};
use dfs_cli::settings::Settings;
use dfs_persistence::PersistenceError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_build, run_cache, run_lineups, run_players};
use crate::summary::print_build;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = Settings::load(cli.config.as_deref());
    let exit_code = match &cli.command {
        Command::Players(args) => exit_on_error(run_players(args, &settings)),
        Command::Build(args) => match run_build(args, &settings) {
            Ok(report) => {
                print_build(&report);
                if report.assembly.validation.valid { 0 } else { 1 }
            }
            Err(error) => report_error(&error),
        },
        Command::Lineups(command) => exit_on_error(run_lineups(command, &settings)),
        Command::Cache(command) => exit_on_error(run_cache(command, &settings)),
    };
    std::process::exit(exit_code);
}

fn exit_on_error(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => report_error(&error),
    }
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    if let Some(hint) = error
        .downcast_ref::<PersistenceError>()
        .and_then(PersistenceError::suggestion)
    {
        eprintln!("hint: {hint}");
    }
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
}
