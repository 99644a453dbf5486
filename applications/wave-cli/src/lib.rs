//! Wave CLI Library
//!
//! Batch front end for the Wave session engine: reads a library and a
//! command stream from JSON files, replays them, and writes one result
//! record per command.
//!
//! This library exposes the runner for testing purposes.

pub mod config;
pub mod error;
pub mod runner;

pub use error::{CliError, Result};
pub use runner::{run, RunFiles};
