//! Storage sinks
//!
//! The pipeline hands each table's rows to a [`RowSink`]. Two sinks ship
//! with the crate: a DuckDB database file and an in-memory store.

mod engine;
mod memory;

pub use engine::DatabaseEngine;
pub use memory::{MemorySink, StoredRow};

use crate::error::Result;
use crate::schema::{TableKind, TableSchema};
use crate::types::Record;

/// Destination for flat rows
pub trait RowSink {
    /// Declare a table. Returns `false` when it already existed and was left as is.
    fn create_table(&mut self, schema: &TableSchema) -> Result<bool>;

    /// Append rows to a table; the sink assigns each row a unique integer id
    fn insert_rows(&mut self, schema: &TableSchema, rows: &[Record]) -> Result<usize>;

    /// Number of rows currently stored in a table
    fn row_count(&self, table: TableKind) -> Result<usize>;
}
