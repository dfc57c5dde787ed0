// src/exec/invoke.rs

//! Spawning the copy tool and draining its output.
//!
//! Both stdout and stderr are piped and read concurrently while the child
//! runs; blocking on one stream while the other fills its pipe would stall
//! the child, so each stream gets its own reader task. The wait is
//! unbounded: the wrapper has no timeout.
//!
//! Stdout reaches the log through the tool's own append-mode log flag, so
//! the reader only mirrors it to the console. Stderr is not captured by that
//! flag; its lines are echoed and also collected so the orchestrator can
//! append them to the log once the child has exited and released the file.

use std::ffi::OsString;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{BackupError, Result};

/// What came back from one copy-tool run.
#[derive(Debug)]
pub struct Invocation {
    /// The child's raw exit code (-1 when terminated without one).
    pub exit_code: i32,
    /// Captured stderr lines, in arrival order.
    pub stderr_lines: Vec<String>,
}

/// Run the copy tool to completion.
///
/// A spawn failure is the only error here; once the process starts, any exit
/// code — including failure codes — is a normal `Invocation`.
pub async fn invoke(program: &str, args: &[OsString]) -> Result<Invocation> {
    info!(program, "starting copy tool");

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|err| BackupError::ToolLaunch {
            program: program.to_string(),
            source: err,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_task = tokio::spawn(async move {
        if let Some(stdout) = stdout {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("{line}");
            }
        }
    });

    let stderr_task = tokio::spawn(async move {
        let mut collected = Vec::new();
        if let Some(stderr) = stderr {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                eprintln!("{line}");
                collected.push(line);
            }
        }
        collected
    });

    // Readers keep draining while we wait, and run to EOF afterwards so any
    // output still buffered at exit is consumed before we settle the result.
    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for copy tool {program:?} to exit"))?;

    let _ = stdout_task.await;
    let stderr_lines = stderr_task.await.unwrap_or_default();

    let exit_code = status.code().unwrap_or(-1);
    debug!(exit_code, stderr_lines = stderr_lines.len(), "copy tool exited");

    Ok(Invocation {
        exit_code,
        stderr_lines,
    })
}
