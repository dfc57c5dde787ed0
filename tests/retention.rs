use std::error::Error;
use std::fs;
use std::time::{Duration, SystemTime};

use robak::retention::prune;
use robak::runlog::RunLog;
use tempfile::TempDir;

mod common;

type TestResult = Result<(), Box<dyn Error>>;

const FORTY_DAYS: Duration = Duration::from_secs(40 * 24 * 60 * 60);
const SECS_PER_DAY_I64: i64 = 24 * 60 * 60;

/// Sink for pruning lines, kept outside the pruned directory.
fn sink(dir: &TempDir) -> Result<RunLog, Box<dyn Error>> {
    Ok(RunLog::create(&dir.path().join("robak_current.log"))?)
}

fn sink_lines(dir: &TempDir) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(dir.path().join("robak_current.log"))?;
    Ok(text.lines().map(str::to_string).collect())
}

#[test]
fn non_positive_retention_disables_pruning_with_one_line() -> TestResult {
    common::init_tracing();
    let logs = TempDir::new()?;
    let sink_dir = TempDir::new()?;

    fs::write(logs.path().join("robak_ancient.log"), "old run")?;

    for days in [0, -7] {
        let mut log = sink(&sink_dir)?;
        let deleted = prune(logs.path(), days, SystemTime::now(), &mut log);
        drop(log);

        assert_eq!(deleted, 0);
        let lines = sink_lines(&sink_dir)?;
        assert_eq!(lines.len(), 1, "disabled pruning must log exactly one line");
        assert!(lines[0].contains("disabled"));
    }

    assert!(logs.path().join("robak_ancient.log").exists());
    Ok(())
}

#[test]
fn prune_deletes_only_old_matching_files() -> TestResult {
    common::init_tracing();
    let logs = TempDir::new()?;
    let sink_dir = TempDir::new()?;

    // All files get "now" as their mtime; age is simulated by moving `now`.
    fs::write(logs.path().join("robak_2020-01-01_00-00-00.log"), "a run")?;
    fs::write(logs.path().join("notes.txt"), "not a log")?;
    fs::write(logs.path().join("other_2020.log"), "wrong prefix")?;
    fs::write(logs.path().join("robak_summary.log.bak"), "wrong suffix")?;

    // Everything is younger than the cutoff: nothing goes.
    let mut log = sink(&sink_dir)?;
    assert_eq!(prune(logs.path(), 30, SystemTime::now(), &mut log), 0);
    drop(log);
    assert!(logs.path().join("robak_2020-01-01_00-00-00.log").exists());

    // Seen from 40 days in the future the matching file is stale.
    let future = SystemTime::now() + FORTY_DAYS;
    let mut log = sink(&sink_dir)?;
    let deleted = prune(logs.path(), 30, future, &mut log);
    drop(log);

    assert_eq!(deleted, 1);
    assert!(!logs.path().join("robak_2020-01-01_00-00-00.log").exists());
    assert!(logs.path().join("notes.txt").exists());
    assert!(logs.path().join("other_2020.log").exists());
    assert!(logs.path().join("robak_summary.log.bak").exists());

    let lines = sink_lines(&sink_dir)?;
    assert!(lines.iter().any(|l| l.contains("Pruned 1 old log file(s).")));
    Ok(())
}

#[test]
fn one_undeletable_candidate_does_not_stop_the_rest() -> TestResult {
    common::init_tracing();
    let logs = TempDir::new()?;
    let sink_dir = TempDir::new()?;

    fs::write(logs.path().join("robak_a.log"), "run a")?;
    fs::write(logs.path().join("robak_b.log"), "run b")?;
    // A directory matching the pattern: remove_file on it fails, which stands
    // in for a locked file.
    fs::create_dir(logs.path().join("robak_locked.log"))?;

    let future = SystemTime::now() + FORTY_DAYS;
    let mut log = sink(&sink_dir)?;
    let deleted = prune(logs.path(), 30, future, &mut log);
    drop(log);

    assert_eq!(deleted, 2);
    assert!(!logs.path().join("robak_a.log").exists());
    assert!(!logs.path().join("robak_b.log").exists());
    assert!(logs.path().join("robak_locked.log").exists());

    let lines = sink_lines(&sink_dir)?;
    assert!(lines.iter().any(|l| l.contains("Failed to delete")));
    assert!(lines.iter().any(|l| l.contains("Pruned 2 old log file(s).")));
    Ok(())
}

#[test]
fn missing_log_directory_counts_as_zero_candidates() -> TestResult {
    common::init_tracing();
    let sink_dir = TempDir::new()?;
    let missing = sink_dir.path().join("never-created");

    let mut log = sink(&sink_dir)?;
    let deleted = prune(&missing, 30, SystemTime::now(), &mut log);
    drop(log);

    assert_eq!(deleted, 0);
    let lines = sink_lines(&sink_dir)?;
    assert!(lines.iter().any(|l| l.contains("nothing to prune")));
    assert!(lines.iter().any(|l| l.contains("Pruned 0 old log file(s).")));
    Ok(())
}

#[test]
fn oversized_retention_window_prunes_nothing() -> TestResult {
    common::init_tracing();
    let logs = TempDir::new()?;
    let sink_dir = TempDir::new()?;

    fs::write(logs.path().join("robak_2020-01-01_00-00-00.log"), "a run")?;

    // Day counts whose window cannot be expressed in seconds must behave
    // like the disabled case, not wrap around to a near-now cutoff.
    for days in [i64::MAX, i64::MAX / SECS_PER_DAY_I64 + 1] {
        let mut log = sink(&sink_dir)?;
        let deleted = prune(logs.path(), days, SystemTime::now(), &mut log);
        drop(log);

        assert_eq!(deleted, 0);
        assert!(logs.path().join("robak_2020-01-01_00-00-00.log").exists());

        let lines = sink_lines(&sink_dir)?;
        assert!(lines.iter().any(|l| l.contains("out of range")));
    }
    Ok(())
}

#[test]
fn current_run_log_is_never_a_candidate() -> TestResult {
    common::init_tracing();
    let logs = TempDir::new()?;

    // Sink lives inside the pruned directory, matching the pattern, as it
    // does in a real run.
    let mut log = RunLog::create(&logs.path().join("robak_current.log"))?;
    let future = SystemTime::now() + FORTY_DAYS;
    let deleted = prune(logs.path(), 30, future, &mut log);
    drop(log);

    assert_eq!(deleted, 0);
    assert!(logs.path().join("robak_current.log").exists());
    Ok(())
}
