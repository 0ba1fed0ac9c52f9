//! Core error types for intervalo-core.
//!
//! This module defines the error hierarchy using thiserror. Configuration
//! problems fail fast at build time, picker range violations are reported
//! to the caller (which usually just logs them), and storage/config I/O
//! failures carry the offending path.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for intervalo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A workout or picker configuration that cannot be built.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration { field: String, message: String },

    /// A value outside a picker's bounds.
    #[error("Value {value} out of range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Application config errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Key-value store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the store file
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a flat JSON object
    #[error("Corrupt store at {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Failed to write the store file
    #[error("Failed to flush store to {path}: {source}")]
    FlushFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
