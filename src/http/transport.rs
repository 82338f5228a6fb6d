use async_trait::async_trait;
use serde_json::Value;

use super::error::TransportError;
use super::types::{HttpResponse, RpcRequest};

/// The HTTP collaborator used by [`BitcoinClient`](crate::rpc::BitcoinClient).
///
/// [`HttpTransport`](super::HttpTransport) is the default implementation.
/// Custom implementations can be injected to route requests elsewhere or to
/// stub the daemon in tests.
///
/// Implementations report non-success statuses as
/// [`TransportError::ServerError`] so the client can still decode a JSON-RPC
/// error body from them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `request` to the daemon and blocks until the exchange completes.
    fn post(&self, request: &RpcRequest) -> Result<HttpResponse, TransportError>;

    /// Posts `request` to the daemon without blocking the calling task.
    async fn post_async(&self, request: &RpcRequest) -> Result<HttpResponse, TransportError>;

    /// Reads one option of the transport's active configuration.
    ///
    /// Returns `None` if the option is unknown or the transport does not
    /// expose its configuration.
    fn config(&self, _option: &str) -> Option<Value> {
        None
    }
}
