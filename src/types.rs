//! Common types used throughout the loader
//!
//! Shared type aliases for the JSON values flowing from source documents
//! into flat output rows.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A flat output row: field name to scalar JSON value.
///
/// Dates are carried as ISO-8601 strings (`YYYY-MM-DD`) and converted by
/// the sink according to the table schema.
pub type Record = JsonObject;
