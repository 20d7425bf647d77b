//! Schema error types

use thiserror::Error;

/// Errors raised while loading or validating an item collection
///
/// Missing or duplicate identifiers are load-time precondition
/// violations; nothing downstream recovers from them.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// I/O failure reading the collection file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The collection file is not valid JSON for the item model
    #[error("Failed to parse item collection: {0}")]
    Parse(#[from] serde_json::Error),
    /// An item has an empty identifier
    #[error("Item at position {0} has no identifier")]
    MissingId(usize),
    /// Two items share an identifier
    #[error("Duplicate item identifier: {0}")]
    DuplicateId(String),
}
