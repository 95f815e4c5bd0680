//! Mapper traits

use super::document::Document;
use crate::error::Result;
use crate::schema::TableKind;
use crate::types::Record;

/// Maps one source document onto flat rows of one table.
///
/// Rows carry only the fields found in the document; geography and date
/// metadata are merged in by the walker.
pub trait RecordMapper: Send + Sync {
    /// Table the rows belong to
    fn table(&self) -> TableKind;

    /// Extract rows from a document
    fn map(&self, document: &Document) -> Result<Vec<Record>>;
}
