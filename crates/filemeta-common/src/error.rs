//! Common error types used throughout filemeta.
//!
//! This module provides a unified error type that covers the failure cases
//! shared by entry handling and metadata providers.

/// Common error type for filemeta.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The entry's URL scheme cannot be served.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new UnsupportedScheme error.
    pub fn unsupported_scheme<S: Into<String>>(scheme: S) -> Self {
        Self::UnsupportedScheme(scheme.into())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
