//! Error types for the HTTP transport.
//!
//! This module defines the [`TransportError`] enum which encompasses every
//! failure mode of a single HTTP exchange with the daemon.

use std::path::PathBuf;

use thiserror::Error;

use super::types::HttpResponse;

/// Errors that can occur while delivering a request to the daemon.
///
/// The variants split into two groups that the RPC client treats
/// differently:
///
/// - **Failures with a response**: [`ServerError`](TransportError::ServerError).
///   The daemon answered, but with a non-success status; its body may still
///   hold a JSON-RPC error payload.
/// - **Failures without a response**: everything else (connection refused,
///   timeouts, TLS setup, middleware errors). See [`TransportError::response`].
///
/// # Example
///
/// ```rust
/// use bitcoind_rpc::http::{HttpResponse, TransportError};
///
/// let err = TransportError::ServerError {
///     response: HttpResponse::new(503, "busy"),
/// };
/// assert_eq!(err.response().map(|r| r.status), Some(503));
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// This typically indicates connectivity issues such as:
    /// - Connection refused (daemon not running)
    /// - Connection timeout
    /// - DNS resolution failure
    /// - TLS/SSL handshake errors
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// An error occurred in the HTTP middleware layer.
    ///
    /// The middleware handles retry logic. This error may indicate that all
    /// retry attempts have been exhausted.
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] reqwest_middleware::Error),

    /// The daemon returned a non-success HTTP status code.
    ///
    /// `bitcoind` answers failed calls with `500` and a JSON-RPC error body,
    /// and authentication failures with `401` and an empty body.
    #[error("Server error {}", .response.status)]
    ServerError {
        /// Status and body as received.
        response: HttpResponse,
    },

    /// The connection could not be made. Used by transports that are not
    /// backed by `reqwest`.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The configured CA certificate could not be read.
    #[error("Failed to read CA certificate {}: {source}", .path.display())]
    CaCertificate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The runtime backing blocking requests could not be started.
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// Failed to serialize the request body.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TransportError {
    /// The HTTP response attached to this failure, if the daemon sent one.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            TransportError::ServerError { response } => Some(response),
            _ => None,
        }
    }
}
