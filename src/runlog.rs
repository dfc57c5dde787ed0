// src/runlog.rs

//! The per-run backup log file.
//!
//! One append-only text artifact per run: header block, pruning lines, the
//! composed command, the copy tool's own output (written by the tool through
//! its append-mode log flag), and a summary block — strictly in that order.
//!
//! The wrapper's handle is dropped before the tool is spawned and reopened
//! in append mode afterwards, so the file never has two writers at once.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::RunConfig;

/// Line-oriented writer over the run's log file.
#[derive(Debug)]
pub struct RunLog {
    file: File,
    path: PathBuf,
}

impl RunLog {
    /// Create (or truncate) the log file. Two runs started in the same
    /// second share a name; the later create wins.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("creating log file {path:?}"))?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Reopen an existing log file for appending.
    pub fn open_append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("reopening log file {path:?}"))?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Append one line.
    pub fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{line}").with_context(|| format!("writing to {:?}", self.path))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write the run header block.
pub fn write_header(
    log: &mut RunLog,
    cfg: &RunConfig,
    source: &Path,
    destination: &Path,
) -> Result<()> {
    log.line(&format!(
        "==== robak v{} backup run ====",
        env!("CARGO_PKG_VERSION")
    ))?;
    log.line(&format!(
        "Started:       {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    log.line(&format!("Source:        {}", source.display()))?;
    log.line(&format!("Destination:   {}", destination.display()))?;
    log.line(&format!("Log retention: {} day(s)", cfg.retain_logs_days))?;
    Ok(())
}

/// Write the end-of-run summary block.
pub fn write_summary(log: &mut RunLog, exit_code: i32, classification: &str) -> Result<()> {
    log.line("---- result ----")?;
    log.line(&format!(
        "Finished:  {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    log.line(&format!("Exit code: {exit_code}"))?;
    log.line(&format!("Result:    {classification}"))?;
    Ok(())
}
