//! Forwarding of cleaned articles to the analysis service.
//!
//! Only successful outcomes are forwarded, as `{ "content", "url" }`. The
//! service's JSON reply is passed back to the caller untouched.

use std::time::Duration;

use async_trait::async_trait;
use newsprep::DownstreamPayload;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    #[error("could not reach {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned a body that is not JSON: {reason}")]
    Decode { url: String, reason: String },

    #[error("invalid downstream client configuration: {0}")]
    Client(String),
}

/// Receiver of cleaned articles.
#[async_trait]
pub trait DownstreamSink: Send + Sync {
    async fn forward(&self, payload: &DownstreamPayload) -> Result<Value, DownstreamError>;
}

/// POSTs payloads as JSON to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpDownstream {
    client: reqwest::Client,
    url: String,
}

impl HttpDownstream {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DownstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DownstreamError::Client(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DownstreamSink for HttpDownstream {
    async fn forward(&self, payload: &DownstreamPayload) -> Result<Value, DownstreamError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|err| DownstreamError::Transport {
                url: self.url.clone(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownstreamError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| DownstreamError::Decode {
                url: self.url.clone(),
                reason: err.to_string(),
            })
    }
}
