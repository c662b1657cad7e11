//! Error types for the qBittorrent WebUI client.

use thiserror::Error;

/// Errors that can occur when talking to the WebUI API.
#[derive(Debug, Error)]
pub enum QbitError {
    /// HTTP transport error (connection refused, timeout, body read failure).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    ///
    /// The WebUI has no structured error schema, so `message` is the raw
    /// response body. Typical statuses:
    /// - `403`: not logged in, or IP banned after too many failed logins
    /// - `404`: unknown torrent hash
    /// - `409`: conflicting state (e.g. category already exists)
    /// - `415`: torrent file is not valid
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        message: String,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local torrent file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request was rejected locally before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A plain-text endpoint returned a value outside its documented set.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl QbitError {
    /// HTTP status of an [`Api`](Self::Api) error, `None` for other variants.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias for `Result<T, QbitError>`.
pub type Result<T> = std::result::Result<T, QbitError>;
