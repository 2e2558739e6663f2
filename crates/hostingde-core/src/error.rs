//! Error types for the hosting.de provider
//!
//! Configuration problems are reported as [`Diagnostics`](crate::Diagnostics);
//! this type covers everything that is not attributable to a single attribute.

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the hosting.de provider
#[derive(Error, Debug)]
pub enum Error {
    /// A configure cycle finished with error diagnostics
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resource or data-source type that was never registered
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors while loading a configuration payload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
