//! Error types for the loader
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Failures are never skipped: the first error aborts the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for the loader
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Source Parsing Errors
    // ============================================================================
    #[error("Failed to parse JSON in '{}': {source}", path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Year directory '{name}' is not an integer ({})", path.display())]
    InvalidYear { path: PathBuf, name: String },

    #[error("Unexpected layout at '{}': {message}", path.display())]
    UnexpectedLayout { path: PathBuf, message: String },

    #[error("Unrecognized quarter file '{name}' ({}), expected one of 1, 2, 3, 4", path.display())]
    UnrecognizedQuarter { path: PathBuf, name: String },

    #[error("Schema mismatch in '{}' at '{field}': {message}", path.display())]
    SchemaMismatch {
        path: PathBuf,
        field: String,
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Unknown table '{name}'")]
    UnknownTable { name: String },

    #[error("{} location exists. Give a different location or delete the file", path.display())]
    OutputExists { path: PathBuf },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Database error: {message}")]
    Database { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed JSON, a non-integer year directory or a misplaced file
    Parse,
    /// Leaf file name is not a quarter indicator
    UnrecognizedQuarter,
    /// Expected key absent or value of the wrong shape
    SchemaMismatch,
    /// Filesystem access failed
    Io,
    /// Storage sink failed
    Database,
    /// Invalid configuration or CLI arguments
    Config,
    /// Anything else
    Other,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create a JSON parse error for a source file
    pub fn json_parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::JsonParse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid year error
    pub fn invalid_year(path: impl AsRef<Path>, name: impl Into<String>) -> Self {
        Self::InvalidYear {
            path: path.as_ref().to_path_buf(),
            name: name.into(),
        }
    }

    /// Create an unexpected layout error
    pub fn unexpected_layout(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::UnexpectedLayout {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an unrecognized quarter error
    pub fn unrecognized_quarter(path: impl AsRef<Path>, name: impl Into<String>) -> Self {
        Self::UnrecognizedQuarter {
            path: path.as_ref().to_path_buf(),
            name: name.into(),
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(
        path: impl AsRef<Path>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            path: path.as_ref().to_path_buf(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an IO error bound to a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound {
                path: path.as_ref().to_path_buf(),
            };
        }
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::JsonParse { .. } | Error::InvalidYear { .. } | Error::UnexpectedLayout { .. } => {
                ErrorKind::Parse
            }
            Error::UnrecognizedQuarter { .. } => ErrorKind::UnrecognizedQuarter,
            Error::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Error::Io { .. } | Error::FileNotFound { .. } => ErrorKind::Io,
            Error::Database { .. } => ErrorKind::Database,
            Error::Config { .. }
            | Error::YamlParse(_)
            | Error::UnknownTable { .. }
            | Error::OutputExists { .. } => ErrorKind::Config,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<duckdb::Error> for Error {
    fn from(e: duckdb::Error) -> Self {
        Self::database(e.to_string())
    }
}

/// Result type alias for the loader
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {e}", message.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_year("/data/abc", "abc");
        assert_eq!(
            err.to_string(),
            "Year directory 'abc' is not an integer (/data/abc)"
        );

        let err = Error::OutputExists {
            path: PathBuf::from("pulse.db"),
        };
        assert_eq!(
            err.to_string(),
            "pulse.db location exists. Give a different location or delete the file"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::invalid_year("x", "x").kind(), ErrorKind::Parse);
        assert_eq!(
            Error::unrecognized_quarter("5.json", "5").kind(),
            ErrorKind::UnrecognizedQuarter
        );
        assert_eq!(
            Error::schema_mismatch("1.json", "data.aggregated", "missing key").kind(),
            ErrorKind::SchemaMismatch
        );
        assert_eq!(Error::database("boom").kind(), ErrorKind::Database);

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::json_parse("1.json", parse).kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let err = Error::io(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
