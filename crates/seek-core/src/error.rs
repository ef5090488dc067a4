//! Error types for seek-core

use thiserror::Error;

/// Result type alias using seek-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in seek-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shortcut string could not be parsed
    #[error("Invalid shortcut '{input}': {reason}")]
    InvalidShortcut { input: String, reason: String },

    /// Configuration value rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
