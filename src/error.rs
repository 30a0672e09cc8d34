//! Error types for the DropNote search engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Query operations deliberately have no error path: searching an empty index simply
//! yields no results, so the host UI can call `search` at any time.

use thiserror::Error;

/// Errors that can occur when reading or writing the note store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem read or write failed
    #[error("Note store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Note file contents could not be parsed
    #[error("Note store parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
