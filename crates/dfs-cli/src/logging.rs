//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: suspicious but accepted input (zero salaries, unreadable cache)
//! - `info`: summary counts per stage
//! - `debug`: per-row and per-placement decisions
//! - `trace`: everything else
//!
//! # Usage
//!
//! ```ignore
//! use dfs_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::from_verbosity(1);
//! init_logging(&config).expect("init logging");
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events are kept at the configured level.
const WORKSPACE_CRATES: [&str; 8] = [
    "dfs_cli",
    "dfs_ingest",
    "dfs_lineup",
    "dfs_model",
    "dfs_ownership",
    "dfs_persistence",
    "dfs_standards",
    "dfs_validate",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` decide when it is set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Write logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Level from a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level_filter = match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level_filter,
            use_env_filter: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// The filter directive used when `RUST_LOG` is not consulted.
    pub fn directive(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        let mut directive = if self.level_filter > LevelFilter::WARN {
            "warn".to_string()
        } else {
            level.clone()
        };
        for krate in WORKSPACE_CRATES {
            directive.push_str(&format!(",{krate}={level}"));
        }
        directive
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(config.directive());
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
