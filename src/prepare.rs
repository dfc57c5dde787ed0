// src/prepare.rs

//! Path & log preparation.
//!
//! Runs before anything touches the log directory:
//! - the source must already exist and resolve to an absolute path;
//! - the destination (and any missing ancestors) is created if absent, then
//!   resolved — re-running against an existing destination is a no-op;
//! - the log directory is created and a timestamped log file path derived.
//!
//! Source/destination failures abort with their reserved exit codes before
//! any log file exists.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::config::RunConfig;
use crate::errors::{BackupError, Result};

/// Literal prefix of every run-log file name; retention matches on it.
pub const LOG_PREFIX: &str = "robak";

/// Absolute paths for one run, plus the log file the run owns.
#[derive(Debug, Clone)]
pub struct PreparedPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub log_file: PathBuf,
}

/// Validate and create the paths a run needs.
pub fn prepare(cfg: &RunConfig) -> Result<PreparedPaths> {
    let source = fs::canonicalize(&cfg.source).map_err(|err| BackupError::SourceResolution {
        path: cfg.source.clone(),
        source: err,
    })?;

    let destination = prepare_destination(&cfg.destination)?;

    fs::create_dir_all(&cfg.log_dir)
        .with_context(|| format!("creating log directory {:?}", cfg.log_dir))?;

    let log_file = cfg.log_dir.join(log_file_name(Local::now()));
    debug!(?source, ?destination, ?log_file, "paths prepared");

    Ok(PreparedPaths {
        source,
        destination,
        log_file,
    })
}

fn prepare_destination(path: &Path) -> Result<PathBuf> {
    let wrap = |err: std::io::Error| BackupError::DestinationSetup {
        path: path.to_path_buf(),
        source: err,
    };
    fs::create_dir_all(path).map_err(wrap)?;
    fs::canonicalize(path).map_err(wrap)
}

/// Log file name for a run started at `now`, at second granularity.
///
/// Two runs started within the same second get the same name; the later one
/// wins silently. This is a documented limitation, not deduplicated.
pub fn log_file_name(now: DateTime<Local>) -> String {
    format!("{LOG_PREFIX}_{}.log", now.format("%Y-%m-%d_%H-%M-%S"))
}
