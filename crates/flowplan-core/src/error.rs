//! Core error types for flowplan-core.
//!
//! The layout engine itself never fails; everything here belongs to the
//! input boundary (time parsing, block validation) and to local storage.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for flowplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Routine store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors raised at the input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A time string is not `HH:mm`
    #[error("Invalid time '{0}': expected HH:mm")]
    InvalidTime(String),

    /// A minute value falls outside its allowed range
    #[error("Minute value {value} for '{field}' is out of range [{min}, {max}]")]
    MinuteOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Block title is empty after trimming
    #[error("Block title must not be empty")]
    EmptyTitle,

    /// Priority tier name not recognized
    #[error("Unknown priority '{0}': expected LOW, MEDIUM, HIGH or CRITICAL")]
    UnknownPriority(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory cannot be resolved or created
    #[error("Cannot prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be coerced to the key's type
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Routine store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A block with this id already exists
    #[error("Block '{0}' already exists")]
    DuplicateId(String),

    /// No block with this id
    #[error("Block '{0}' not found")]
    NotFound(String),

    /// Stored data fails validation
    #[error("Store file {path} holds an invalid block: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
