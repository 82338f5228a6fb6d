//! JSON-RPC layer on top of the HTTP transport.
//!
//! - [`BitcoinClient`] - Envelope building, the shared request id counter and
//!   the blocking, async and callback request paths
//! - [`RpcError`] - Application, communication and decode failures
//! - [`RpcApi`] / [`AsyncRpcApi`] - Generic `call` entry points plus typed
//!   wrappers for common daemon methods

mod api;
mod client;
mod error;
mod response;
mod types;

pub use api::{AsyncRpcApi, RpcApi};
pub use client::{BitcoinClient, OnFulfilled, OnRejected, PendingRequest};
pub use error::{COMMUNICATION_ERROR_CODE, COMMUNICATION_ERROR_MESSAGE, ClientError, RpcError};
pub use types::{BlockchainInfo, MempoolInfo, NetworkInfo};
