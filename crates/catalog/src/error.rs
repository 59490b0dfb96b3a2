//! Error types for the catalog crate.
//!
//! Loading is the only fallible step in the whole catalog: once a
//! [`Catalog`](crate::Catalog) exists every query on it is total.

use thiserror::Error;

/// Errors that can occur while loading the movie dataset
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Dataset file could not be found
    #[error("Failed to open dataset file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source was read but is not a valid movie array
    ///
    /// Covers invalid JSON, a non-array top level, missing required fields
    /// and fields of the wrong type.
    #[error("Parse error at line {line}, column {column}: {reason}")]
    Parse {
        line: usize,
        column: usize,
        reason: String,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        // The loader parses from a byte slice, so serde_json never reports I/O here
        CatalogError::Parse {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_becomes_parse_with_position() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,\n x]").unwrap_err();
        let err = CatalogError::from(json_err);

        match err {
            CatalogError::Parse { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }
}
