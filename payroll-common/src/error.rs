//! Common error types for payroll triage

use thiserror::Error;

/// Common result type for payroll triage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the payroll triage crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON record decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML document could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML document could not be written
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested issue not found in the worklist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input or precondition violation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
