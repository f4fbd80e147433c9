//! Error types and handling for promptgrid core

use thiserror::Error;

/// Result type alias for promptgrid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for promptgrid core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Completion request errors
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

/// Configuration-specific errors
///
/// Raised before any request goes out; a sweep that hits one of these
/// produces zero result records.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// A single completion request failed
///
/// These never escape the sweep runner: each one becomes a failed result
/// record and iteration moves on to the next tuple.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}
