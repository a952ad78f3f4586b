//! Error types for the health_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for health_core operations
///
/// These are fatal for the session: they propagate up to `main`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A row in the backing file could not be turned into a record
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Console input closed while a prompt was waiting
    #[error("Unexpected end of input")]
    UnexpectedEof,
}

/// Recoverable user-input errors.
///
/// The action that raised one of these reports it and is abandoned; the
/// session carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input.")]
    InvalidInput { field: &'static str, value: String },

    #[error("Invalid gender.")]
    InvalidGender(String),
}
