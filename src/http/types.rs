// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-RPC 1.0 request envelope, as posted to the daemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl RpcRequest {
    /// Builds an envelope, lower-casing `method` and coercing `params` into a
    /// positional list.
    pub fn new(method: &str, params: Value, id: u64) -> Self {
        Self {
            method: method.to_lowercase(),
            params: into_param_list(params),
            id,
        }
    }
}

/// `null` means no parameters, an array is taken as-is and any other value
/// becomes a single positional parameter.
pub fn into_param_list(params: Value) -> Vec<Value> {
    match params {
        Value::Null => Vec::new(),
        Value::Array(values) => values,
        other => vec![other],
    }
}

/// The `error` member of a JSON-RPC response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
}

/// A raw HTTP exchange result: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convenience constructor for a JSON body.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
