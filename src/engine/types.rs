//! Engine types
//!
//! Configuration and outcome values for a pipeline run.

use crate::config::LoaderConfig;
use crate::schema::TableKind;
use serde::Serialize;

/// Configuration for a load
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Tables to load; run order is always the fixed table order
    pub tables: Vec<TableKind>,
    /// Rows per insert call
    pub batch_size: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            tables: TableKind::ALL.to_vec(),
            batch_size: 1000,
        }
    }
}

impl LoadConfig {
    /// Create a new load config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to some tables
    #[must_use]
    pub fn with_tables(mut self, tables: Vec<TableKind>) -> Self {
        self.tables = tables;
        self
    }

    /// Set batch size
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Selected tables in run order, without duplicates
    pub fn ordered_tables(&self) -> Vec<TableKind> {
        TableKind::ALL
            .into_iter()
            .filter(|kind| self.tables.contains(kind))
            .collect()
    }
}

impl From<&LoaderConfig> for LoadConfig {
    fn from(config: &LoaderConfig) -> Self {
        Self::new()
            .with_tables(config.tables.clone())
            .with_batch_size(config.batch_size)
    }
}

/// Outcome for one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLoad {
    /// Table loaded
    pub table: TableKind,
    /// Rows inserted by this run
    pub rows_inserted: usize,
    /// Rows in the table after the insert
    pub table_total: usize,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Per-table outcomes, in run order
    pub tables: Vec<TableLoad>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RunSummary {
    /// Rows inserted across all tables
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows_inserted).sum()
    }

    /// Outcome for one table, if it was loaded
    pub fn table(&self, kind: TableKind) -> Option<&TableLoad> {
        self.tables.iter().find(|t| t.table == kind)
    }
}
