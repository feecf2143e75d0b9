// file: src/logging/mod.rs
// version: 1.0.0
// guid: a9b0c1d2-e3f4-5678-9012-345678abcdef

//! Logging system for the daily pipeline runner

pub mod logger;

pub use logger::init_logger;
