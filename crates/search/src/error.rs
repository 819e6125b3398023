//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by storage backends.
///
/// Ranking never fails; these only surface from [`KeyValueStore`](crate::KeyValueStore)
/// implementations and are swallowed by [`RecentSelections`](crate::RecentSelections).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Storage backend is unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with chapiz-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Storage unavailable
    Storage = 11001,
    /// Filesystem error
    Io = 11002,
    /// JSON error
    Json = 11003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::Storage(_) => SearchErrorCode::Storage,
            SearchError::Io(_) => SearchErrorCode::Io,
            SearchError::Json(_) => SearchErrorCode::Json,
        }
    }
}
