// src/exec/outcome.rs

use std::fmt;

/// Classification of the copy tool's bitmask exit code.
///
/// Pure function of the code; no error is ever raised here. A failing copy
/// is a normal result, surfaced through the wrapper's own exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 0 (nothing needed copying) or 1 (files copied, no failures).
    Success,
    /// 2–7: extra or mismatched files detected, no hard failure.
    SuccessWithNotes,
    /// 8 and up, or a termination without an exit code.
    Failure,
}

impl Outcome {
    pub fn classify(exit_code: i32) -> Self {
        match exit_code {
            0 | 1 => Outcome::Success,
            2..=7 => Outcome::SuccessWithNotes,
            _ => Outcome::Failure,
        }
    }

    /// Long-form meaning for the log's summary block.
    pub fn describe(self) -> &'static str {
        match self {
            Outcome::Success => "success (files copied or already up to date, no failures)",
            Outcome::SuccessWithNotes => {
                "success with notes (extra or mismatched files detected, no hard failure)"
            }
            Outcome::Failure => {
                "failure (some files could not be copied, or a serious error occurred)"
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Success => "success",
            Outcome::SuccessWithNotes => "success with notes",
            Outcome::Failure => "failure",
        };
        f.write_str(s)
    }
}
