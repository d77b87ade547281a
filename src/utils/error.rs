//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Reasons a single slot extraction produced nothing.
///
/// These never cross the extractor boundary; the router logs them and
/// leaves the slot unset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Marker not found: {0:?}")]
    MarkerNotFound(String),

    #[error("No opening brace after marker")]
    NoRegion,

    #[error("Unbalanced delimiters: depth {depth} at end of text")]
    UnbalancedDelimiters { depth: usize },
}

/// Errors that can occur while reading a response body
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur while rendering a report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
