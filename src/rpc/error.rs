use thiserror::Error;

use crate::config::ConfigError;
use crate::http::TransportError;

/// Message of every [`RpcError::Communication`].
pub const COMMUNICATION_ERROR_MESSAGE: &str = "Error communicating with server";

/// Code of a communication failure that produced no HTTP response.
pub const COMMUNICATION_ERROR_CODE: i64 = 500;

/// The outcome of a failed RPC call.
///
/// Application errors use the daemon's own code space (negative numbers such
/// as `-8` for invalid parameters); communication errors use HTTP status
/// codes, so callers can branch on [`RpcError::code`] alone.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The daemon reported a JSON-RPC error.
    #[error("{message} (code {code})")]
    Application { message: String, code: i64 },

    /// The daemon could not be reached, or answered with a non-200 status and
    /// no JSON-RPC error.
    #[error("{message} (code {code})")]
    Communication { message: String, code: i64 },

    /// The daemon's answer is not JSON, or its result does not have the
    /// requested shape.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RpcError {
    pub fn application(message: impl Into<String>, code: i64) -> Self {
        RpcError::Application {
            message: message.into(),
            code,
        }
    }

    pub fn communication(code: i64) -> Self {
        RpcError::Communication {
            message: COMMUNICATION_ERROR_MESSAGE.to_string(),
            code,
        }
    }

    /// The daemon could not be reached at all.
    pub fn unreachable() -> Self {
        Self::communication(COMMUNICATION_ERROR_CODE)
    }

    /// Numeric code. [`RpcError::Decode`] reports
    /// [`COMMUNICATION_ERROR_CODE`].
    pub fn code(&self) -> i64 {
        match self {
            RpcError::Application { code, .. } | RpcError::Communication { code, .. } => *code,
            RpcError::Decode(_) => COMMUNICATION_ERROR_CODE,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RpcError::Application { message, .. } | RpcError::Communication { message, .. } => message.clone(),
            RpcError::Decode(e) => e.to_string(),
        }
    }

    pub fn is_application(&self) -> bool {
        matches!(self, RpcError::Application { .. })
    }

    pub fn is_communication(&self) -> bool {
        matches!(self, RpcError::Communication { .. })
    }
}

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
