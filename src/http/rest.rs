//! `reqwest`-backed transport.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::http::{HttpTransport, Method, TransportError};

/// The production transport: one `reqwest::Client` bound to the
/// configured base URL.
///
/// Each call is a single attempt. Connection pooling is whatever the
/// underlying client does by default; there is no retry or timeout
/// policy at this layer.
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl RestTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpTransport for RestTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!(%method, %url, "Sending request");

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), %url, "Request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Deserialize(e.to_string()))
    }
}
