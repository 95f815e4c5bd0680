//! Execution engine module
//!
//! Runs the extraction for every selected table and hands the rows to a
//! sink.
//!
//! # Overview
//!
//! - `Pipeline` - walks each table's export domain and inserts the rows
//! - `LoadConfig` - which tables to load and the insert batch size
//! - `RunSummary` - per-table row counts returned to the caller
//!
//! The run is fail-fast: the first error is returned as is, and tables
//! inserted before it stay in the sink.

mod types;

pub use types::{LoadConfig, RunSummary, TableLoad};

use crate::database::RowSink;
use crate::error::Result;
use crate::schema::{TableKind, TableSchema};
use crate::walker::TreeWalker;
use std::path::PathBuf;
use std::time::Instant;

/// Orchestrates a full load from an export tree
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Root of the export tree
    input_dir: PathBuf,
    /// Load configuration
    config: LoadConfig,
}

impl Pipeline {
    /// Create a pipeline over an export tree
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            config: LoadConfig::default(),
        }
    }

    /// Set load configuration
    #[must_use]
    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    /// Create every selected table, then load them one after another
    pub fn run<S: RowSink + ?Sized>(&self, sink: &mut S) -> Result<RunSummary> {
        let start = Instant::now();
        let tables = self.config.ordered_tables();

        for kind in &tables {
            sink.create_table(&TableSchema::for_kind(*kind))?;
        }

        let mut summary = RunSummary::default();
        for kind in tables {
            summary.tables.push(self.load_table(kind, sink)?);
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            tables = summary.tables.len(),
            rows = summary.total_rows(),
            duration_ms = summary.duration_ms,
            "Load complete"
        );

        Ok(summary)
    }

    /// Walk one table's domain and insert its rows
    pub fn load_table<S: RowSink + ?Sized>(
        &self,
        kind: TableKind,
        sink: &mut S,
    ) -> Result<TableLoad> {
        let walker = TreeWalker::for_table(kind);
        let root = kind.domain().root(&self.input_dir);

        tracing::debug!(table = %kind, root = %root.display(), "Walking export domain");
        let rows = walker.walk(&root)?;

        let mut rows_inserted = 0;
        for batch in rows.chunks(self.config.batch_size.max(1)) {
            rows_inserted += sink.insert_rows(walker.schema(), batch)?;
        }

        let table_total = sink.row_count(kind)?;
        tracing::info!(table = %kind, rows = rows_inserted, total = table_total, "Inserted records");

        Ok(TableLoad {
            table: kind,
            rows_inserted,
            table_total,
        })
    }
}

#[cfg(test)]
mod tests;
