//! Source documents and path-tracking navigation
//!
//! A [`Node`] remembers the JSON path it was reached through, so a missing
//! key is reported with the file and the full path (`data.transactionData[3].paymentInstruments[0]`).

use crate::error::{Error, Result};
use crate::types::JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed leaf file
#[derive(Debug, Clone)]
pub struct Document {
    /// File the document was read from
    source: PathBuf,
    /// Parsed JSON
    root: JsonValue,
}

impl Document {
    /// Wrap an already parsed value
    pub fn new(source: impl Into<PathBuf>, root: JsonValue) -> Self {
        Self {
            source: source.into(),
            root,
        }
    }

    /// Parse a document from raw bytes; invalid UTF-8 is a parse error
    pub fn parse(source: impl Into<PathBuf>, bytes: &[u8]) -> Result<Self> {
        let source = source.into();
        let root = serde_json::from_slice(bytes).map_err(|e| Error::json_parse(&source, e))?;
        Ok(Self { source, root })
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &bytes)
    }

    /// File the document was read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Root node
    pub fn root(&self) -> Node<'_> {
        Node {
            source: &self.source,
            value: &self.root,
            path: String::new(),
        }
    }

    /// Shortcut for the `data` node every export carries
    pub fn data(&self) -> Result<Node<'_>> {
        self.root().get("data")
    }
}

/// A value inside a document, with its JSON path
#[derive(Debug, Clone)]
pub struct Node<'a> {
    source: &'a Path,
    value: &'a JsonValue,
    path: String,
}

impl<'a> Node<'a> {
    /// Path from the document root
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Borrow the underlying value
    pub fn value(&self) -> &'a JsonValue {
        self.value
    }

    /// Clone the underlying value out
    pub fn to_value(&self) -> JsonValue {
        self.value.clone()
    }

    /// Whether the value is JSON `null`
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Required object member
    pub fn get(&self, key: &str) -> Result<Node<'a>> {
        self.member(key)?
            .ok_or_else(|| self.mismatch(self.child_path(key), "missing key"))
    }

    /// Object member that may be absent
    pub fn member(&self, key: &str) -> Result<Option<Node<'a>>> {
        let object = self
            .value
            .as_object()
            .ok_or_else(|| self.mismatch(self.path.clone(), "expected an object"))?;

        Ok(object.get(key).map(|value| Node {
            source: self.source,
            value,
            path: self.child_path(key),
        }))
    }

    /// Required array element
    pub fn at(&self, index: usize) -> Result<Node<'a>> {
        let path = format!("{}[{index}]", self.path);
        let array = self
            .value
            .as_array()
            .ok_or_else(|| self.mismatch(self.path.clone(), "expected a list"))?;

        array
            .get(index)
            .map(|value| Node {
                source: self.source,
                value,
                path: path.clone(),
            })
            .ok_or_else(|| self.mismatch(path, format!("list has {} entries", array.len())))
    }

    /// Elements of a required array
    pub fn items(&self) -> Result<Vec<Node<'a>>> {
        let array = self
            .value
            .as_array()
            .ok_or_else(|| self.mismatch(self.path.clone(), "expected a list"))?;

        Ok(array
            .iter()
            .enumerate()
            .map(|(i, value)| Node {
                source: self.source,
                value,
                path: format!("{}[{i}]", self.path),
            })
            .collect())
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn mismatch(&self, field: String, message: impl Into<String>) -> Error {
        Error::schema_mismatch(self.source, field, message)
    }
}
