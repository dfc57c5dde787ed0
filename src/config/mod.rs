// src/config/mod.rs

//! Run configuration: the immutable, fully-resolved set of inputs for one
//! backup invocation.
//!
//! - [`model`] holds the `RunConfig` value itself.
//! - [`prompt`] is the capability seam for interactive input, so tests can
//!   supply canned answers without a real terminal.
//! - [`resolve`] turns CLI arguments + environment defaults + prompts into a
//!   `RunConfig`, once, at startup. No ambient state persists past this step.

pub mod model;
pub mod prompt;
pub mod resolve;

pub use model::RunConfig;
pub use prompt::{Prompter, ScriptedPrompter, StdinPrompter};
pub use resolve::resolve;
