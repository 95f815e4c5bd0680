//! Table schema registry
//!
//! Declares the five output tables, the columns each expects and which of
//! them are mandatory. The walker validates every row against these before
//! it reaches a sink, and sinks use them to create tables.

mod types;

pub use types::{
    Column, ColumnType, Domain, FieldViolation, TableKind, GEO_LEVELS, TOP_ENTITY_TYPES,
};

use crate::types::{JsonValue, Record};
use chrono::NaiveDate;

/// Columns shared by every table
const COMMON: [Column; 5] = [
    Column::required("aggregated_by", ColumnType::Enum(GEO_LEVELS)),
    Column::required("aggregate_name", ColumnType::Text),
    Column::required("year", ColumnType::Integer),
    Column::required("start_date", ColumnType::Date),
    Column::required("end_date", ColumnType::Date),
];

/// Declared shape of one output table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Table this schema describes
    pub kind: TableKind,
    /// Columns, excluding the sink-assigned `id`
    pub columns: Vec<Column>,
}

impl TableSchema {
    /// Schema for a table kind
    pub fn for_kind(kind: TableKind) -> Self {
        use ColumnType::{Enum, Float, Integer, Text};

        let specific: Vec<Column> = match kind {
            TableKind::AggregatedUser => vec![
                Column::required("users", Integer),
                Column::required("app_opens", Integer),
            ],
            TableKind::AggregatedUserDevice => vec![
                Column::required("brand", Text),
                Column::required("count", Integer),
                Column::required("percentage", Float),
            ],
            TableKind::AggregatedTransaction => vec![
                Column::required("name", Text),
                Column::required("type", Text),
                Column::required("count", Integer),
                Column::required("amount", Float),
            ],
            TableKind::TopUser => vec![
                Column::required("name", Text),
                Column::required("type", Enum(TOP_ENTITY_TYPES)),
                Column::required("registered_users", Integer),
            ],
            // Typeless aggregate entries come without a name
            TableKind::TopTransaction => vec![
                Column::nullable("entity_name", Text),
                Column::required("entity_type", Enum(TOP_ENTITY_TYPES)),
                Column::required("type", Text),
                Column::required("count", Integer),
                Column::required("amount", Float),
            ],
        };

        Self {
            kind,
            columns: COMMON.iter().copied().chain(specific).collect(),
        }
    }

    /// Table identifier
    pub fn table_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check a row against the schema
    pub fn validate(&self, record: &Record) -> Result<(), FieldViolation> {
        if let Some(extra) = record.keys().find(|k| self.column(k).is_none()) {
            return Err(FieldViolation::new(
                extra.as_str(),
                format!("not a column of {}", self.table_name()),
            ));
        }

        for column in &self.columns {
            let value = record
                .get(column.name)
                .ok_or_else(|| FieldViolation::new(column.name, "missing value"))?;
            check_value(column, value)?;
        }

        Ok(())
    }
}

/// Integer content of a JSON number. Floats count when they have no
/// fractional part (`100.0`) and fit in an `i64`.
pub fn integer_value(value: &JsonValue) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn check_value(column: &Column, value: &JsonValue) -> Result<(), FieldViolation> {
    if value.is_null() {
        return if column.nullable {
            Ok(())
        } else {
            Err(FieldViolation::new(column.name, "null in a non-nullable column"))
        };
    }

    let fits = match column.column_type {
        ColumnType::Integer => integer_value(value).is_some(),
        ColumnType::Float => value.is_number(),
        ColumnType::Text => value.is_string(),
        ColumnType::Date => value
            .as_str()
            .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()),
        ColumnType::Enum(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
    };

    if fits {
        Ok(())
    } else {
        Err(FieldViolation::new(
            column.name,
            format!("{value} is not a valid {:?} value", column.column_type),
        ))
    }
}
