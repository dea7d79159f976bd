//! Error types for design-source fetching.

use thiserror::Error;

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while retrieving a design document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or HTTP-status failure from the design source.
    #[error("design source request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body was not a valid simplified document.
    #[error("invalid design document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Local file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
