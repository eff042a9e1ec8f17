use std::path::PathBuf;

use thiserror::Error;

/// Errors raised inside the API access layer.
///
/// These never cross the public fetch surface: listing and reference calls
/// absorb them into typed fallbacks, logging the cause.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The response body could not be read as the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while staging images for upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot stage more than {limit} images")]
    TooManyImages { limit: usize },

    #[error("unsupported image type: {}", .path.display())]
    UnsupportedType { path: PathBuf },

    #[error("image exceeds {max_bytes} bytes: {}", .path.display())]
    TooLarge { path: PathBuf, max_bytes: u64 },

    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
