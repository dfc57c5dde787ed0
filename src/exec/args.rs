// src/exec/args.rs

//! Argument-list composition for the copy tool.
//!
//! Flag order is fixed so every logged command line reads the same way:
//! positionals, always-on copy flags, conditional mode flags, output-shaping
//! flags, the log flag, and `/L` last under dry-run.

use std::ffi::OsString;
use std::path::Path;

use crate::config::RunConfig;

/// Compose the full argument list for one invocation.
pub fn build_args(
    cfg: &RunConfig,
    source: &Path,
    destination: &Path,
    log_file: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![source.into(), destination.into()];

    // Recurse including empty directories; copy data, attributes, timestamps,
    // security, owner and auditing info. Spelled out rather than the /COPYALL
    // shorthand so the logged command is self-documenting.
    args.push("/E".into());
    args.push("/COPY:DATSOU".into());

    if cfg.backup_mode {
        args.push("/B".into());
    }
    if cfg.mirror {
        args.push("/MIR".into());
    }
    args.push(format!("/R:{}", cfg.retry).into());
    args.push(format!("/W:{}", cfg.wait_secs).into());
    // threads == 1 omits /MT entirely: the tool then runs in its
    // single-threaded default mode.
    if cfg.threads > 1 {
        args.push(format!("/MT:{}", cfg.threads).into());
    }
    if cfg.exclude_junctions {
        args.push("/XJ".into());
    }

    // Verbose, tee to console, no per-file progress, ETA, no itemised file
    // list (keeps the log readable at the cost of per-file detail).
    for flag in ["/V", "/TEE", "/NP", "/ETA", "/NFL"] {
        args.push(flag.into());
    }

    // Append, not truncate: the header and pruning lines already written to
    // the log must survive.
    let mut log_flag = OsString::from("/LOG+:");
    log_flag.push(log_file);
    args.push(log_flag);

    if cfg.dry_run {
        args.push("/L".into());
    }

    args
}

/// Render the command line as logged: program name, quoted positionals, then
/// the flags (quoted only when they contain whitespace).
pub fn render_command_line(program: &str, args: &[OsString]) -> String {
    let mut parts = vec![program.to_string()];
    for (i, arg) in args.iter().enumerate() {
        let s = arg.to_string_lossy();
        if i < 2 || s.contains(' ') {
            parts.push(format!("\"{s}\""));
        } else {
            parts.push(s.into_owned());
        }
    }
    parts.join(" ")
}

/// One-line restatement of the run parameters for the log.
pub fn parameter_summary(cfg: &RunConfig) -> String {
    format!(
        "Parameters: mirror={} backup_mode={} dry_run={} retry={} wait={} threads={} \
         exclude_junctions={} retain_logs_days={}",
        cfg.mirror,
        cfg.backup_mode,
        cfg.dry_run,
        cfg.retry,
        cfg.wait_secs,
        cfg.threads,
        cfg.exclude_junctions,
        cfg.retain_logs_days,
    )
}
