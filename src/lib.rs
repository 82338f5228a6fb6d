pub mod config;
pub mod http;
pub mod rpc;

pub use crate::config::{ClientOptions, ConnectionConfig, load_configuration};
pub use crate::http::{HttpTransport, Transport, TransportError};
pub use crate::rpc::{BitcoinClient, ClientError, PendingRequest, RpcError};
