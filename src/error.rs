//! Error types for the Vitrine library.
//!
//! All errors are represented by the [`VitrineError`] enum. The taxonomy is
//! deliberately small: unmatched filters, unknown sort keys, and empty query
//! results are normal outcomes, not errors, so the only failure conditions
//! are invalid arguments and malformed descriptor JSON.
//!
//! # Examples
//!
//! ```
//! use vitrine::error::{Result, VitrineError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(VitrineError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Vitrine operations.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Invalid argument (empty or out-of-range aggregate input)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Query-related errors (malformed descriptors, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with VitrineError.
pub type Result<T> = std::result::Result<T, VitrineError>;

impl VitrineError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VitrineError::InvalidArgument(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        VitrineError::Query(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VitrineError::invalid_argument("empty collection");
        assert_eq!(err.to_string(), "Invalid argument: empty collection");

        let err = VitrineError::query("bad descriptor");
        assert_eq!(err.to_string(), "Query error: bad descriptor");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: VitrineError = json_err.into();
        assert!(matches!(err, VitrineError::Json(_)));
    }
}
