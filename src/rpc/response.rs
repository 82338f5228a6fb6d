use log::warn;
use serde_json::Value;

use crate::http::{HttpResponse, RpcErrorObject, TransportError};

use super::error::RpcError;

/// Turns a daemon response into the call's result.
///
/// 1. A non-null `error` member fails with [`RpcError::Application`],
///    whatever the status code.
/// 2. Otherwise a status other than 200 fails with
///    [`RpcError::Communication`] carrying that status.
/// 3. Otherwise the `result` member is returned, `null` when absent.
///
/// A body that is not JSON is a communication error for non-200 statuses and
/// a [`RpcError::Decode`] for 200.
pub(crate) fn decode_response(response: &HttpResponse) -> Result<Value, RpcError> {
    let body: Value = match serde_json::from_slice(&response.body) {
        Ok(body) => body,
        Err(_) if response.status != 200 => return Err(RpcError::communication(response.status.into())),
        Err(e) => return Err(RpcError::Decode(e)),
    };

    let mut body = match body {
        Value::Object(map) => map,
        _ if response.status != 200 => return Err(RpcError::communication(response.status.into())),
        _ => return Ok(Value::Null),
    };

    if let Some(error) = body.remove("error").filter(|error| !error.is_null()) {
        return Err(application_error(error));
    }

    if response.status != 200 {
        return Err(RpcError::communication(response.status.into()));
    }

    Ok(body.remove("result").unwrap_or(Value::Null))
}

/// Maps a transport failure onto the error the caller sees.
///
/// When the daemon did answer, its body is decoded as above so that a
/// JSON-RPC error payload on a 4xx/5xx response still surfaces as an
/// application error. Without a response the failure is a generic
/// communication error.
pub(crate) fn decode_failure(error: TransportError) -> RpcError {
    warn!(error:% = error; "RPC: Transport failure");

    match error.response() {
        Some(response) => match decode_response(response) {
            Err(e) => e,
            Ok(_) => RpcError::communication(response.status.into()),
        },
        None => RpcError::unreachable(),
    }
}

/// Settles a completed exchange.
pub(crate) fn settle(result: Result<HttpResponse, TransportError>) -> Result<Value, RpcError> {
    match result {
        Ok(response) => decode_response(&response),
        Err(error) => Err(decode_failure(error)),
    }
}

fn application_error(error: Value) -> RpcError {
    match error {
        Value::String(message) => RpcError::application(message, 0),
        other => {
            let object: RpcErrorObject = serde_json::from_value(other).unwrap_or_default();
            RpcError::application(object.message, object.code)
        },
    }
}
