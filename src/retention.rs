// src/retention.rs

//! Log retention: delete run logs older than the configured window.
//!
//! Pruning is housekeeping and must never block the backup itself: every
//! error here — a missing directory, an unreadable entry, a file that will
//! not delete — is written to the run log and swallowed. The one thing this
//! module never does is return an error to the caller.

use std::path::Path;
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};

use crate::prepare::LOG_PREFIX;
use crate::runlog::RunLog;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Delete files in `log_dir` matching `robak_*.log` whose modification time
/// is strictly before `now - max_age_days`. Returns the number deleted.
///
/// `max_age_days <= 0` disables pruning (one line logged, nothing scanned).
/// `now` is a parameter so the cutoff is deterministic under test.
pub fn prune(log_dir: &Path, max_age_days: i64, now: SystemTime, log: &mut RunLog) -> usize {
    if max_age_days <= 0 {
        say(
            log,
            &format!("Log retention disabled (retain-logs-days = {max_age_days}); skipping prune."),
        );
        return 0;
    }

    // A window too large to express leaves nothing older than the cutoff.
    let Some(cutoff) = (max_age_days as u64)
        .checked_mul(SECS_PER_DAY)
        .map(Duration::from_secs)
        .and_then(|window| now.checked_sub(window))
    else {
        say(log, "Log retention window is out of range; nothing to prune.");
        return 0;
    };

    let mut candidates = match list_candidates(log_dir, log) {
        Some(paths) => paths,
        None => Vec::new(),
    };
    candidates.sort();

    let mut deleted = 0usize;
    for path in candidates {
        // The current run's log is never a candidate.
        if path == log.path() {
            continue;
        }

        let modified = match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(ts) => ts,
            Err(err) => {
                say(log, &format!("Skipping {}: cannot read age ({err})", path.display()));
                continue;
            }
        };

        if modified >= cutoff {
            continue;
        }

        say(log, &format!("Deleting old log {}", path.display()));
        match std::fs::remove_file(&path) {
            Ok(()) => {
                deleted += 1;
                say(log, &format!("Deleted {}", path.display()));
            }
            Err(err) => {
                // One stubborn file must not stop the rest.
                say(log, &format!("Failed to delete {}: {err}", path.display()));
            }
        }
    }

    say(log, &format!("Pruned {deleted} old log file(s)."));
    debug!(deleted, dir = %log_dir.display(), "log retention pass finished");
    deleted
}

/// Paths in `log_dir` whose names match the run-log pattern. A missing or
/// unlistable directory counts as zero candidates.
fn list_candidates(log_dir: &Path, log: &mut RunLog) -> Option<Vec<std::path::PathBuf>> {
    let entries = match std::fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(err) => {
            say(
                log,
                &format!("Cannot list log directory {} ({err}); nothing to prune.", log_dir.display()),
            );
            return None;
        }
    };

    let prefix = format!("{LOG_PREFIX}_");
    let mut paths = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                say(log, &format!("Log directory scan error ({err}); continuing."));
                continue;
            }
        };
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(&prefix) && name.ends_with(".log") {
            paths.push(entry.path());
        }
    }
    Some(paths)
}

/// Write a retention line to the run log; a failing sink downgrades to a
/// diagnostic warning rather than aborting the pass.
fn say(log: &mut RunLog, line: &str) {
    if let Err(err) = log.line(line) {
        warn!(error = %err, "could not write retention line to run log");
    }
}
