// file: src/cli/mod.rs
// version: 1.0.0
// guid: e3f4a5b6-c7d8-9012-3456-789012efabcd

//! Command line interface for the daily pipeline runner

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
