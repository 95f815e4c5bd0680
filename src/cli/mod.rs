//! CLI module
//!
//! Command-line interface for loading an export tree into a database file.
//!
//! ```text
//! pulse-loader <DIRECTORY> [--output PATH] [--tables a,b] [--config FILE]
//!              [--batch-size N] [--format text|json] [--verbose]
//! ```

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;
