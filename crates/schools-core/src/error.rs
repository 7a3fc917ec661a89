//! Centralized error types for the importer.

use thiserror::Error;

/// Main error type for schools operations.
#[derive(Error, Debug)]
pub enum SchoolsError {
    #[error("Cannot convert {column} of {table} row '{id}': {value:?} ({reason})")]
    Coercion {
        table: String,
        id: String,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for schools operations.
pub type SchoolsResult<T> = Result<T, SchoolsError>;

impl SchoolsError {
    /// Create a coercion error for a single cell.
    pub fn coercion(
        table: &str,
        id: &str,
        column: &str,
        value: &str,
        reason: impl ToString,
    ) -> Self {
        Self::Coercion {
            table: table.to_string(),
            id: id.to_string(),
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
