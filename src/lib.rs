// file: src/lib.rs
// version: 1.0.0
// guid: f4a5b6c7-d8e9-0123-4567-890123fabcde

//! # Poster Daily Runner
//!
//! Drives the daily reporting pipeline of a Poster POS installation: resolve
//! a calendar date, invoke the external daily import, then the anomaly scan,
//! strictly in that order. The two operations are opaque management commands
//! of the managed application; this crate owns their invocation contract
//! (working directory, interpreter, entrypoint, arguments) and the fail-fast
//! policy around it.

pub mod cli;
pub mod config;
pub mod date;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use error::{Result, RunnerError};

/// Version information for the runner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
