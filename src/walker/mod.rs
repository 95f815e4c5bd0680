//! Tree walker module
//!
//! Walks one export domain, maps every leaf file with a [`RecordMapper`]
//! and merges the geography and quarter metadata recovered from the path
//! into each row.
//!
//! Directory entries are visited in lexicographic order so the produced
//! row sequence is the same on every run.

use crate::error::{Error, Result};
use crate::layout::{self, DirectoryRole, LeafLocation};
use crate::mapper::{mapper_for, Document, RecordMapper};
use crate::schema::{TableKind, TableSchema};
use crate::types::{JsonValue, Record};
use std::fs;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Produces the rows of one table from one domain root
pub struct TreeWalker {
    /// Mapper for the table
    mapper: Box<dyn RecordMapper>,
    /// Schema every row is checked against
    schema: TableSchema,
}

impl TreeWalker {
    /// Create a walker around a mapper
    pub fn new(mapper: Box<dyn RecordMapper>) -> Self {
        let schema = TableSchema::for_kind(mapper.table());
        Self { mapper, schema }
    }

    /// Walker with the built-in mapper of a table
    pub fn for_table(kind: TableKind) -> Self {
        Self::new(mapper_for(kind))
    }

    /// Table the rows belong to
    pub fn table(&self) -> TableKind {
        self.mapper.table()
    }

    /// Schema rows are validated against
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Produce every row below a domain root (`.../country/india`)
    pub fn walk(&self, root: &Path) -> Result<Vec<Record>> {
        let mut rows = Vec::new();

        for leaf in leaf_files(root)? {
            let location = layout::locate(root, &leaf)?;
            let document = Document::load(&leaf)?;
            let mapped = self.mapper.map(&document)?;

            tracing::debug!(
                table = %self.table(),
                file = %document.source().display(),
                rows = mapped.len(),
                "Mapped leaf file"
            );

            for row in mapped {
                rows.push(self.finish_row(&location, row)?);
            }
        }

        Ok(rows)
    }

    /// Merge path metadata into a mapped row and validate it
    fn finish_row(&self, location: &LeafLocation, mut row: Record) -> Result<Record> {
        let window = location.window()?;

        row.insert(
            "aggregated_by".to_string(),
            JsonValue::from(location.scope.level.as_str()),
        );
        row.insert(
            "aggregate_name".to_string(),
            JsonValue::from(location.scope.name.as_str()),
        );
        row.insert("year".to_string(), JsonValue::from(window.year));
        row.insert(
            "start_date".to_string(),
            JsonValue::from(window.start_date.format(DATE_FORMAT).to_string()),
        );
        row.insert(
            "end_date".to_string(),
            JsonValue::from(window.end_date.format(DATE_FORMAT).to_string()),
        );

        self.schema
            .validate(&row)
            .map_err(|v| Error::schema_mismatch(&location.path, v.field, v.message))?;

        Ok(row)
    }
}

/// Leaf files below a domain root, in traversal order.
///
/// State groups are descended three levels (state, year, file); any other
/// child is a country year directory holding the files directly. Year
/// directory names are checked even when the directory is empty.
pub fn leaf_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut leaves = Vec::new();

    for child in sorted_children(root)? {
        match layout::classify_child(&child)? {
            DirectoryRole::StateGroup => {
                for state in sorted_children(&child)? {
                    for year in sorted_children(&state)? {
                        layout::parse_year(&year)?;
                        leaves.extend(sorted_children(&year)?);
                    }
                }
            }
            DirectoryRole::Year(_) => leaves.extend(sorted_children(&child)?),
        }
    }

    Ok(leaves)
}

fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    children.sort();
    Ok(children)
}
