use std::io;

use thiserror::Error;

/// Library-wide error type for setup-assets operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Transport-level HTTP failure (DNS, connect, TLS, body read).
    #[error("HTTP request to {url} failed: {details}")]
    Http { url: String, details: String },

    /// Server answered with a non-success status.
    #[error("HTTP Error {status}: {url}")]
    HttpStatus { url: String, status: u16 },

    /// Asset source URL is malformed or uses an unsupported scheme.
    #[error("Invalid asset URL '{url}': {reason}")]
    InvalidAssetUrl { url: String, reason: String },

    /// Asset file name would escape its target directory.
    #[error("Invalid asset file name '{0}': must be a plain file name")]
    InvalidAssetFileName(String),
}
