// src/exec/mod.rs

//! Copy-tool invocation layer.
//!
//! The tool is an opaque subprocess with a documented flag vocabulary and a
//! bitmask exit-code contract; the wrapper's whole contract with it is:
//! build the argument list, spawn it, drain its output, read its exit code.
//!
//! - [`args`] composes the ordered argument list from the run configuration.
//! - [`invoke`] spawns the process and keeps both output pipes drained.
//! - [`outcome`] classifies the exit code.

pub mod args;
pub mod invoke;
pub mod outcome;

pub use args::{build_args, parameter_summary, render_command_line};
pub use invoke::{Invocation, invoke};
pub use outcome::Outcome;
