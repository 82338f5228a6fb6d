// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::path::PathBuf;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Certificate;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::{Value, json};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::config::ConnectionConfig;

use super::error::TransportError;
use super::transport::Transport;
use super::types::{HttpResponse, RpcRequest};

/// reqwest-backed [`Transport`] posting to `{scheme}://{host}:{port}/` with
/// HTTP basic authentication.
///
/// Blocking posts run on a private current-thread runtime with a client of
/// their own; async posts use a separate client driven by the caller's
/// runtime. From inside a multi-threaded runtime a blocking post moves the
/// worker off the scheduler first. A current-thread runtime cannot be
/// blocked, so there it fails with [`TransportError::Runtime`].
pub struct HttpTransport {
    base_url: Url,
    user: String,
    pass: String,
    ca: Option<PathBuf>,
    timeout: Duration,
    max_retries: u32,
    client: ClientWithMiddleware,
    blocking_client: ClientWithMiddleware,
    runtime: Option<Runtime>,
    last_latency: RwLock<Option<(Duration, Instant)>>,
}

impl HttpTransport {
    /// Builds a transport for a resolved connection.
    ///
    /// TLS verification uses the CA bundle from [`ConnectionConfig::ca_bundle`]
    /// when one is configured and exists, and the default roots otherwise.
    pub fn new(config: &ConnectionConfig) -> Result<Self, TransportError> {
        let base_url = config
            .base_url()
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

        let certificates = match config.ca_bundle() {
            Some(path) => {
                let pem = std::fs::read(path).map_err(|source| TransportError::CaCertificate {
                    path: path.to_path_buf(),
                    source,
                })?;
                Certificate::from_pem_bundle(&pem)?
            },
            None => Vec::new(),
        };

        let client = build_client(&certificates, config.timeout, config.max_retries, true)?;
        let blocking_client = build_client(&certificates, config.timeout, config.max_retries, false)?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        debug!(
            base_uri = base_url.as_str(),
            custom_ca = config.ca_bundle().is_some();
            "HTTP: Transport configured"
        );

        Ok(Self {
            base_url,
            user: config.user.clone(),
            pass: config.pass.clone(),
            ca: config.ca_bundle().map(|path| path.to_path_buf()),
            timeout: config.timeout,
            max_retries: config.max_retries,
            client,
            blocking_client,
            runtime: Some(runtime),
            last_latency: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Round-trip time of the most recent exchange, if any completed.
    pub fn last_latency(&self) -> Option<Duration> {
        self.last_latency
            .read()
            .ok()
            .and_then(|latency| latency.map(|(d, _)| d))
    }

    async fn send(&self, client: &ClientWithMiddleware, request: &RpcRequest) -> Result<HttpResponse, TransportError> {
        let start = Instant::now();

        let resp = client
            .post(self.base_url.clone())
            .basic_auth(&self.user, Some(&self.pass))
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(request)?)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        self.update_latency(start.elapsed());

        let response = HttpResponse::new(status.as_u16(), body.to_vec());
        if !status.is_success() {
            warn!(
                method = request.method.as_str(),
                id = request.id,
                status = status.as_u16();
                "HTTP: Daemon returned an error status"
            );
            return Err(TransportError::ServerError { response });
        }

        Ok(response)
    }

    fn update_latency(&self, duration: Duration) {
        if let Ok(mut latency) = self.last_latency.write() {
            *latency = Some((duration, Instant::now()));
        }
    }
}

fn build_client(
    certificates: &[Certificate],
    timeout: Duration,
    max_retries: u32,
    pooled: bool,
) -> Result<ClientWithMiddleware, TransportError> {
    let retry_policy = reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(max_retries);

    let mut builder = reqwest::Client::builder().timeout(timeout);
    for certificate in certificates {
        builder = builder.add_root_certificate(certificate.clone());
    }
    if !pooled {
        // Idle connections would be tied to the private runtime between calls.
        builder = builder.pool_max_idle_per_host(0);
    }
    let inner_client = builder.build()?;

    Ok(reqwest_middleware::ClientBuilder::new(inner_client)
        .with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy))
        .build())
}

#[async_trait]
impl Transport for HttpTransport {
    fn post(&self, request: &RpcRequest) -> Result<HttpResponse, TransportError> {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| TransportError::ConnectionFailed("transport is shut down".to_string()))?;
        let exchange = || runtime.block_on(self.send(&self.blocking_client, request));

        match Handle::try_current() {
            Err(_) => exchange(),
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(exchange)
            },
            Ok(_) => {
                warn!(method = request.method.as_str(), id = request.id; "HTTP: Blocking post on a current-thread runtime");
                Err(TransportError::Runtime(std::io::Error::other(
                    "blocking request issued from a current-thread async runtime",
                )))
            },
        }
    }

    async fn post_async(&self, request: &RpcRequest) -> Result<HttpResponse, TransportError> {
        self.send(&self.client, request).await
    }

    /// Supported options: `base_uri`, `auth` (`[user, pass]`), `verify`
    /// (`true` or the CA bundle path), `timeout` (seconds) and `retries`.
    fn config(&self, option: &str) -> Option<Value> {
        match option {
            "base_uri" => Some(Value::String(self.base_url.to_string())),
            "auth" => Some(json!([self.user, self.pass])),
            "verify" => Some(match &self.ca {
                Some(path) => Value::String(path.display().to_string()),
                None => Value::Bool(true),
            }),
            "timeout" if self.timeout.subsec_nanos() == 0 => Some(json!(self.timeout.as_secs())),
            "timeout" => Some(json!(self.timeout.as_secs_f64())),
            "retries" => Some(json!(self.max_retries)),
            _ => None,
        }
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        // Dropping a runtime from async code panics; this does not block.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
