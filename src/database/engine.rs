//! DuckDB-backed sink
//!
//! Writes every table into a single DuckDB database file. Ids come from one
//! sequence per table.

use super::RowSink;
use crate::error::{Error, Result};
use crate::schema::{integer_value, Column, ColumnType, TableKind, TableSchema};
use crate::types::{JsonValue, Record};
use duckdb::types::Value;
use duckdb::{params, params_from_iter, Connection};
use std::path::Path;

/// DuckDB database sink
pub struct DatabaseEngine {
    /// DuckDB connection
    conn: Connection,
    /// Location used (for logging)
    location: String,
}

impl DatabaseEngine {
    /// Open (or create) a database file
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            Error::database(format!("Failed to open '{}': {e}", path.display()))
        })?;

        Ok(Self {
            conn,
            location: path.display().to_string(),
        })
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database(format!("Failed to create DuckDB connection: {e}")))?;

        Ok(Self {
            conn,
            location: ":memory:".to_string(),
        })
    }

    /// Where the data is written
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Underlying connection, for ad-hoc queries
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Whether a table is already present
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = ?",
            params![table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// DDL for a table and its id sequence
    fn create_table_sql(schema: &TableSchema) -> String {
        let table = schema.table_name();
        let mut columns = vec![format!(
            "\"id\" BIGINT PRIMARY KEY DEFAULT nextval('{table}_id_seq')"
        )];
        columns.extend(schema.columns.iter().map(|c| {
            let not_null = if c.nullable { "" } else { " NOT NULL" };
            format!("\"{}\" {}{not_null}", c.name, c.column_type.sql_type())
        }));

        format!(
            "CREATE SEQUENCE IF NOT EXISTS {table}_id_seq START 1;\nCREATE TABLE \"{table}\" (\n    {}\n);",
            columns.join(",\n    ")
        )
    }

    /// Parameterized insert for one row
    fn insert_sql(schema: &TableSchema) -> String {
        let names: Vec<String> = schema
            .columns
            .iter()
            .map(|c| format!("\"{}\"", c.name))
            .collect();
        let placeholders: Vec<&str> = schema
            .columns
            .iter()
            .map(|c| match c.column_type {
                ColumnType::Date => "CAST(? AS DATE)",
                _ => "?",
            })
            .collect();

        format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            schema.table_name(),
            names.join(", "),
            placeholders.join(", ")
        )
    }
}

impl RowSink for DatabaseEngine {
    fn create_table(&mut self, schema: &TableSchema) -> Result<bool> {
        let table = schema.table_name();
        if self.table_exists(table)? {
            tracing::warn!(table, "Table already exists, skipping creation");
            return Ok(false);
        }

        self.conn
            .execute_batch(&Self::create_table_sql(schema))
            .map_err(|e| Error::database(format!("Failed to create table {table}: {e}")))?;

        tracing::info!(table, "Table created");
        Ok(true)
    }

    fn insert_rows(&mut self, schema: &TableSchema, rows: &[Record]) -> Result<usize> {
        let sql = Self::insert_sql(schema);
        tracing::debug!("Executing insert: {}", sql);

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in rows {
                let values = schema
                    .columns
                    .iter()
                    .map(|c| sql_value(schema.kind, c, row.get(c.name)))
                    .collect::<Result<Vec<Value>>>()?;
                stmt.execute(params_from_iter(values))?;
            }
        }
        tx.commit()?;

        Ok(rows.len())
    }

    fn row_count(&self, table: TableKind) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", table.name()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// Convert a row value to the DuckDB value for its column
fn sql_value(table: TableKind, column: &Column, value: Option<&JsonValue>) -> Result<Value> {
    let value = match value {
        None | Some(JsonValue::Null) => return Ok(Value::Null),
        Some(v) => v,
    };

    let converted = match column.column_type {
        ColumnType::Integer => integer_value(value).map(Value::BigInt),
        ColumnType::Float => value.as_f64().map(Value::Double),
        ColumnType::Text | ColumnType::Enum(_) | ColumnType::Date => {
            value.as_str().map(|s| Value::Text(s.to_string()))
        }
    };

    converted.ok_or_else(|| {
        Error::database(format!(
            "Cannot store {value} in {table}.{} ({})",
            column.name,
            column.column_type.sql_type()
        ))
    })
}
