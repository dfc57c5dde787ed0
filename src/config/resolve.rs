// src/config/resolve.rs

use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::RunConfig;
use crate::config::prompt::Prompter;

/// Name of the external copy tool when `ROBAK_COPY_TOOL` is not set.
pub const DEFAULT_COPY_TOOL: &str = "robocopy";

/// Build the immutable `RunConfig` for this run.
///
/// Source and destination fall back to interactive prompts when absent; the
/// log folder falls back to `ROBAK_LOG_DIR`, then to the platform
/// application-data logs directory.
pub fn resolve(args: &CliArgs, prompter: &mut dyn Prompter) -> Result<RunConfig> {
    let source = match &args.source {
        Some(path) => path.clone(),
        None => prompt_path(prompter, "Source folder to back up")?,
    };

    let destination = match &args.destination {
        Some(path) => path.clone(),
        None => prompt_path(prompter, "Destination folder")?,
    };

    let log_dir = match &args.log_folder {
        Some(path) => path.clone(),
        None => default_log_dir(),
    };

    let tool = std::env::var("ROBAK_COPY_TOOL").unwrap_or_else(|_| DEFAULT_COPY_TOOL.to_string());

    let cfg = RunConfig {
        source,
        destination,
        log_dir,
        mirror: args.mirror,
        backup_mode: args.use_backup_mode,
        dry_run: args.dry_run,
        retry: args.retry,
        wait_secs: args.wait,
        threads: args.threads,
        exclude_junctions: args.exclude_junctions,
        retain_logs_days: args.retain_logs_days,
        tool,
    };

    debug!(?cfg, "resolved run configuration");
    Ok(cfg)
}

fn prompt_path(prompter: &mut dyn Prompter, question: &str) -> Result<PathBuf> {
    let answer = prompter.ask(question)?;
    let answer = answer.trim();
    if answer.is_empty() {
        bail!("no path given for: {question}");
    }
    Ok(PathBuf::from(answer))
}

/// Default log folder: `ROBAK_LOG_DIR`, else `<app-data>/robak/logs`, else
/// `./logs` when no app-data directory is known.
pub fn default_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROBAK_LOG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::data_local_dir() {
        Some(base) => base.join("robak").join("logs"),
        None => PathBuf::from("logs"),
    }
}
