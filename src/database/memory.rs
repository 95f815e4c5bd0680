//! In-memory sink

use super::RowSink;
use crate::error::{Error, Result};
use crate::schema::{TableKind, TableSchema};
use crate::types::Record;
use std::collections::BTreeMap;

/// A stored row with its sink-assigned id
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    pub id: i64,
    pub record: Record,
}

/// Keeps every table in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: BTreeMap<TableKind, Vec<StoredRow>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of a table, in insertion order
    pub fn rows(&self, table: TableKind) -> &[StoredRow] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or_default()
    }

    /// Tables declared so far
    pub fn tables(&self) -> impl Iterator<Item = TableKind> + '_ {
        self.tables.keys().copied()
    }
}

impl RowSink for MemorySink {
    fn create_table(&mut self, schema: &TableSchema) -> Result<bool> {
        if self.tables.contains_key(&schema.kind) {
            tracing::warn!(table = schema.table_name(), "Table already exists, skipping creation");
            return Ok(false);
        }
        self.tables.insert(schema.kind, Vec::new());
        Ok(true)
    }

    fn insert_rows(&mut self, schema: &TableSchema, rows: &[Record]) -> Result<usize> {
        let stored = self
            .tables
            .get_mut(&schema.kind)
            .ok_or_else(|| Error::database(format!("no such table: {}", schema.table_name())))?;

        let mut next_id = stored.last().map_or(1, |row| row.id + 1);
        for record in rows {
            stored.push(StoredRow {
                id: next_id,
                record: record.clone(),
            });
            next_id += 1;
        }

        Ok(rows.len())
    }

    fn row_count(&self, table: TableKind) -> Result<usize> {
        self.tables
            .get(&table)
            .map(Vec::len)
            .ok_or_else(|| Error::database(format!("no such table: {table}")))
    }
}
