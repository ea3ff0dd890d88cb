//! Error types for the toolkit.

use thiserror::Error;

/// Toolkit-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected input, reported before any grid is allocated
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Triangle vertices are collinear or coincident
    #[error("Degenerate triangle: vertices are collinear or coincident")]
    DegenerateTriangle,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`] with a formatted message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
