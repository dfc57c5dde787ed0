// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod prepare;
pub mod retention;
pub mod runlog;

use std::time::SystemTime;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::{RunConfig, StdinPrompter};
use crate::errors::Result;
use crate::exec::Outcome;
use crate::runlog::RunLog;

/// High-level entry point used by `main.rs`.
///
/// Resolves the run configuration (prompting on the real terminal for any
/// missing paths) and performs one backup run. The returned code is the copy
/// tool's exit code, passed through unchanged.
pub async fn run(args: CliArgs) -> Result<i32> {
    let mut prompter = StdinPrompter;
    let cfg = config::resolve(&args, &mut prompter)?;
    run_with_config(cfg).await
}

/// One backup run over an already-resolved configuration.
///
/// Order matters and is append-only in the log: prepare paths, create the
/// log, write the header, prune old logs, log the composed command, invoke
/// the tool (which appends its own output), then the stderr remainder and
/// the summary block.
pub async fn run_with_config(cfg: RunConfig) -> Result<i32> {
    let paths = prepare::prepare(&cfg)?;

    if cfg.mirror {
        eprintln!(
            "WARNING: mirror mode deletes destination files that no longer exist in the source."
        );
    }
    if cfg.dry_run {
        println!("Dry run: listing only, nothing will be copied.");
    }

    let mut log = RunLog::create(&paths.log_file)?;
    runlog::write_header(&mut log, &cfg, &paths.source, &paths.destination)?;

    retention::prune(&cfg.log_dir, cfg.retain_logs_days, SystemTime::now(), &mut log);

    let argv = exec::build_args(&cfg, &paths.source, &paths.destination, &paths.log_file);
    let command_line = exec::render_command_line(&cfg.tool, &argv);
    log.line(&format!("Command: {command_line}"))?;
    log.line(&exec::parameter_summary(&cfg))?;

    info!(command = %command_line, log_file = %paths.log_file.display(), "invoking copy tool");

    // The tool appends to the log itself; release our handle first.
    drop(log);

    let invocation = exec::invoke(&cfg.tool, &argv).await?;
    let outcome = Outcome::classify(invocation.exit_code);

    let mut log = RunLog::open_append(&paths.log_file)?;
    for line in &invocation.stderr_lines {
        log.line(&format!("stderr: {line}"))?;
    }
    runlog::write_summary(&mut log, invocation.exit_code, outcome.describe())?;

    println!(
        "robak: finished with exit code {} ({outcome}); log at {}",
        invocation.exit_code,
        paths.log_file.display()
    );

    Ok(invocation.exit_code)
}
