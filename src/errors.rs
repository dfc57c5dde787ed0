// src/errors.rs

//! Crate-wide error taxonomy and reserved exit codes.
//!
//! The copy tool reports its own result through a bitmask exit code in the
//! 0–16 range, which the wrapper passes through unchanged. Setup failures
//! that happen before (or instead of) a copy use the reserved codes below so
//! a scheduler can tell "setup failed" apart from "copy tool reported
//! failure".

use std::path::PathBuf;

use thiserror::Error;

/// Source path missing or unresolvable.
pub const EXIT_SOURCE_RESOLUTION: i32 = 100;
/// Destination could not be created or resolved.
pub const EXIT_DESTINATION_SETUP: i32 = 101;
/// The copy tool process failed to start.
pub const EXIT_TOOL_LAUNCH: i32 = 102;
/// Any other wrapper-side failure (e.g. the log directory could not be
/// created). Also outside the tool's range: a scheduler must never read a
/// setup failure as a copy result.
pub const EXIT_OTHER: i32 = 103;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("source path {path:?} does not exist or cannot be resolved: {source}")]
    SourceResolution {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create or resolve destination {path:?}: {source}")]
    DestinationSetup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to launch copy tool {program:?}: {source}")]
    ToolLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackupError {
    /// Reserved process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            BackupError::SourceResolution { .. } => EXIT_SOURCE_RESOLUTION,
            BackupError::DestinationSetup { .. } => EXIT_DESTINATION_SETUP,
            BackupError::ToolLaunch { .. } => EXIT_TOOL_LAUNCH,
            BackupError::Other(_) => EXIT_OTHER,
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;
