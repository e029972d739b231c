//! Upload error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while uploading
///
/// Non-2xx HTTP responses are NOT errors: the response is returned
/// unmodified and status interpretation is left to the caller.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Transport-level failure from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A part's file could not be attached to the form
    #[error("Cannot attach '{}': {source}", path.display())]
    Form {
        /// File that failed to attach
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// The request configuration set a raw body alongside the generated form
    #[error("A custom body cannot be combined with the generated multipart form")]
    BodyConflict,

    /// A configured header name or value is not valid for HTTP
    #[error("Invalid header: {header}")]
    InvalidHeader {
        /// The offending header name
        header: String,
    },
}

/// Result type for upload operations
pub type Result<T> = std::result::Result<T, UploadError>;
