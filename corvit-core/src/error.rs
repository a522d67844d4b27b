//! Error types for the Corvit core library.

use thiserror::Error;

/// Top-level error type for all core operations.
#[derive(Error, Debug)]
pub enum CorvitError {
    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CorvitError>;
