#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;

use robak::config::RunConfig;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// A `RunConfig` with the CLI's default knobs and the given paths.
pub fn test_config(source: &Path, destination: &Path, log_dir: &Path) -> RunConfig {
    RunConfig {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        log_dir: log_dir.to_path_buf(),
        mirror: false,
        backup_mode: false,
        dry_run: false,
        retry: 3,
        wait_secs: 5,
        threads: 8,
        exclude_junctions: false,
        retain_logs_days: 30,
        tool: "robocopy".to_string(),
    }
}

/// Write an executable shell script standing in for the copy tool.
#[cfg(unix)]
pub fn stub_tool(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-copy-tool.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("writing stub tool");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("marking stub tool executable");
    path
}

/// The single `robak_*.log` file inside `log_dir`.
pub fn find_run_log(log_dir: &Path) -> PathBuf {
    let mut logs: Vec<PathBuf> = std::fs::read_dir(log_dir)
        .expect("listing log dir")
        .map(|e| e.expect("dir entry").path())
        .filter(|p| {
            p.file_name()
                .map(|n| {
                    let name = n.to_string_lossy();
                    name.starts_with("robak_") && name.ends_with(".log")
                })
                .unwrap_or(false)
        })
        .collect();
    assert_eq!(logs.len(), 1, "expected exactly one run log in {log_dir:?}");
    logs.remove(0)
}
