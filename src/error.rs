//! Error types for Tabula
//!
//! Provides a unified error type for all operations.
//!
//! "Not found" outcomes (unknown id, missing table file, no matching record)
//! are not errors: they come back as `Ok(false)` / `Ok(None)`.

use thiserror::Error;

/// Result type alias using TabulaError
pub type Result<T> = std::result::Result<T, TabulaError>;

/// Unified error type for Tabula operations
#[derive(Debug, Error)]
pub enum TabulaError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Table File Errors
    // -------------------------------------------------------------------------
    #[error("Table '{table}' is malformed: {source}")]
    MalformedTable {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Table '{table}' has no ids left to assign")]
    IdExhausted { table: String },

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Codec error: {0}")]
    Codec(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tempfile::PersistError> for TabulaError {
    fn from(err: tempfile::PersistError) -> Self {
        TabulaError::Io(err.error)
    }
}
