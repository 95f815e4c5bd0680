// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Pulse Loader
//!
//! Loads a hierarchical tree of quarterly payments statistics, exported as
//! JSON files, into a relational store with one table per dataset.
//!
//! ## Features
//!
//! - **Path metadata**: geography, year and quarter are recovered from the
//!   directory layout, never from file content
//! - **Five tables**: aggregated users, users by device, aggregated
//!   transactions, top users and top transactions
//! - **Validated rows**: every row is checked against its table schema
//!   before it reaches storage
//! - **DuckDB output**: rows land in a single database file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pulse_loader::{DatabaseEngine, Pipeline, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let mut engine = DatabaseEngine::open(Path::new("pulse.db"))?;
//!     let summary = Pipeline::new("pulse/data").run(&mut engine)?;
//!     println!("{} rows", summary.total_rows());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         Pipeline                              │
//! │   for each table: walk domain → validate rows → insert batch   │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬────────────┐
//! │  Layout  │ Calendar  │    Mapper     │  Schema   │  Database  │
//! ├──────────┼───────────┼───────────────┼───────────┼────────────┤
//! │ Country  │ Q1..Q4    │ Aggregated    │ Columns   │ DuckDB     │
//! │ State    │ Windows   │ Top lists     │ Validate  │ Memory     │
//! └──────────┴───────────┴───────────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the loader
pub mod error;

/// Common types and type aliases
pub mod types;

/// Quarters and their date windows
pub mod calendar;

/// Directory layout conventions
pub mod layout;

/// Output table schemas
pub mod schema;

/// Leaf document mappers
pub mod mapper;

/// Export tree traversal
pub mod walker;

/// Storage sinks via DuckDB
pub mod database;

/// Pipeline driver
pub mod engine;

/// Loader configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::LoaderConfig;
pub use database::{DatabaseEngine, MemorySink, RowSink};
pub use engine::{LoadConfig, Pipeline, RunSummary, TableLoad};
pub use schema::{TableKind, TableSchema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
