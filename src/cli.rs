// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! All flags are optional. `--source` and `--destination` are prompted for
//! interactively when omitted (see `config::resolve`).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `robak`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "robak",
    version,
    about = "Back up a folder with robocopy, keeping timestamped run logs.",
    long_about = None
)]
pub struct CliArgs {
    /// Folder to back up. Prompted for when omitted.
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Folder to back up into. Created if absent. Prompted for when omitted.
    #[arg(long, value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Where run logs are written.
    ///
    /// Default: `ROBAK_LOG_DIR`, else the platform application-data logs
    /// directory.
    #[arg(long, value_name = "PATH")]
    pub log_folder: Option<PathBuf>,

    /// Mirror mode: make the destination an exact mirror of the source.
    ///
    /// DANGEROUS: files present at the destination but absent from the
    /// source are deleted by the copy tool.
    #[arg(long)]
    pub mirror: bool,

    /// Run the copy tool in backup mode (elevated backup privileges).
    #[arg(long)]
    pub use_backup_mode: bool,

    /// List what would be copied without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Retry count for failed copies.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    pub retry: u32,

    /// Seconds to wait between retries.
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    pub wait: u32,

    /// Copy threads. A value of 1 runs the tool in its single-threaded
    /// default mode (no multithreading flag is passed).
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    pub threads: u32,

    /// Skip junction points.
    #[arg(long)]
    pub exclude_junctions: bool,

    /// Delete run logs older than this many days. Zero or negative disables
    /// pruning.
    #[arg(long, value_name = "DAYS", default_value_t = 30)]
    pub retain_logs_days: i64,

    /// Diagnostics logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ROBAK_LOG` or a default level will be used. This controls
    /// operator diagnostics only, not the backup run log.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
