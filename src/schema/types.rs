//! Schema types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Values allowed in the `type` / `entity_type` column of the top tables
pub const TOP_ENTITY_TYPES: &[&str] = &["states", "pincodes", "districts"];

/// Values allowed in the `aggregated_by` column
pub const GEO_LEVELS: &[&str] = &["country", "state"];

// ============================================================================
// Export Domains
// ============================================================================

/// One top-level JSON export category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    AggregatedUser,
    AggregatedTransaction,
    TopUser,
    TopTransaction,
}

impl Domain {
    /// Path of the domain below the input directory
    pub fn relative_path(self) -> &'static str {
        match self {
            Domain::AggregatedUser => "aggregated/user",
            Domain::AggregatedTransaction => "aggregated/transaction",
            Domain::TopUser => "top/user",
            Domain::TopTransaction => "top/transaction",
        }
    }

    /// Directory whose children follow the year / state-group convention
    pub fn root(self, input_dir: &Path) -> PathBuf {
        input_dir
            .join(self.relative_path())
            .join("country")
            .join(crate::layout::COUNTRY_NAME)
    }
}

// ============================================================================
// Table Kinds
// ============================================================================

/// Output table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    AggregatedUserDevice,
    AggregatedUser,
    AggregatedTransaction,
    TopUser,
    TopTransaction,
}

impl TableKind {
    /// All tables, in load order
    pub const ALL: [TableKind; 5] = [
        TableKind::AggregatedUserDevice,
        TableKind::AggregatedUser,
        TableKind::AggregatedTransaction,
        TableKind::TopUser,
        TableKind::TopTransaction,
    ];

    /// Table identifier in the sink
    pub fn name(self) -> &'static str {
        match self {
            TableKind::AggregatedUser => "aggregated_user",
            TableKind::AggregatedUserDevice => "aggregated_user_device",
            TableKind::AggregatedTransaction => "aggregated_transaction",
            TableKind::TopUser => "top_user",
            TableKind::TopTransaction => "top_transaction",
        }
    }

    /// Export domain the table is read from
    pub fn domain(self) -> Domain {
        match self {
            TableKind::AggregatedUser | TableKind::AggregatedUserDevice => Domain::AggregatedUser,
            TableKind::AggregatedTransaction => Domain::AggregatedTransaction,
            TableKind::TopUser => Domain::TopUser,
            TableKind::TopTransaction => Domain::TopTransaction,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| Error::UnknownTable {
                name: s.to_string(),
            })
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Semantic column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
    Date,
    /// Text restricted to a fixed set of values
    Enum(&'static [&'static str]),
}

impl ColumnType {
    /// SQL type used when creating the column
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer => "BIGINT",
            ColumnType::Float => "DOUBLE",
            ColumnType::Text | ColumnType::Enum(_) => "VARCHAR",
            ColumnType::Date => "DATE",
        }
    }
}

/// Column declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: &'static str,
    /// Semantic type
    pub column_type: ColumnType,
    /// Whether NULL is accepted
    pub nullable: bool,
}

impl Column {
    /// Mandatory column
    pub const fn required(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: false,
        }
    }

    /// Nullable column
    pub const fn nullable(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: true,
        }
    }
}

/// A row value that does not fit its table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
