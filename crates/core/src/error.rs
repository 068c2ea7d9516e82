//! Error types for zdsearch
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! Lookup misses are never errors; they surface as empty results.

use thiserror::Error;

/// Result type alias for core and index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for indexing and querying
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value could not be tokenized (nested records, nulls, nested arrays)
    #[error("cannot tokenize {value}: {type_name} values are not supported")]
    UnsupportedValueType {
        /// Type name of the offending value
        type_name: &'static str,
        /// Rendering of the offending value
        value: String,
    },

    /// Configuration could not be applied
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an `UnsupportedValueType` error for the given value.
    pub fn unsupported(value: &crate::Value) -> Self {
        Error::UnsupportedValueType {
            type_name: value.type_name(),
            value: value.to_string(),
        }
    }
}
