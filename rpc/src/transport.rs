//! The request/response primitive every client call is built on.

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Sends one JSON-RPC request and returns the node's `result` object.
///
/// Implementations must be safe to share between concurrent calls; no state from one
/// call may leak into another.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, method: &str, params: Value) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn invoke(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        (**self).invoke(method, params).await
    }
}

// ── HTTP ────────────────────────────────────────────────────────────────

/// JSON-RPC over HTTP POST, the way a node's admin/public port expects it:
/// `{"method": m, "params": [params]}`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
    client: Client,
}

impl HttpTransport {
    /// Transport with reqwest's default client settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeouts(
        url: impl Into<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ConfigError::Http(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::with_timeouts(
            config.node_url.clone(),
            config.request_timeout(),
            config.connect_timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let request = json!({
            "method": method,
            "params": [params],
        });

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))?;

        match body.get_mut("result").map(Value::take) {
            Some(result @ Value::Object(_)) => Ok(result),
            Some(_) => Err(TransportError::Malformed("`result` is not an object".into())),
            None => Err(TransportError::Malformed("response has no `result`".into())),
        }
    }
}
