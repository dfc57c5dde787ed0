// src/config/model.rs

use std::path::PathBuf;

/// Resolved inputs for one backup run.
///
/// Constructed once by [`crate::config::resolve`]; never mutated during the
/// run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Folder to back up. Existence is checked in `prepare`, not here.
    pub source: PathBuf,

    /// Folder to back up into. Created (with ancestors) in `prepare`.
    pub destination: PathBuf,

    /// Where run logs live; also the directory retention prunes.
    pub log_dir: PathBuf,

    /// Mirror mode: destination becomes an exact mirror of the source,
    /// including deletions. Passed through to the copy tool.
    pub mirror: bool,

    /// Copy with elevated backup privileges.
    pub backup_mode: bool,

    /// List-only mode; nothing is written to the destination.
    pub dry_run: bool,

    /// Retry count for failed copies.
    pub retry: u32,

    /// Seconds between retries.
    pub wait_secs: u32,

    /// Copy threads; 1 means the tool's single-threaded default mode.
    pub threads: u32,

    /// Skip junction points.
    pub exclude_junctions: bool,

    /// Run logs older than this many days are pruned. Zero or negative
    /// disables pruning.
    pub retain_logs_days: i64,

    /// Program name or path of the external copy tool.
    ///
    /// Normally just "robocopy"; overridable via `ROBAK_COPY_TOOL` so the
    /// invocation path can be exercised against a stub.
    pub tool: String,
}
