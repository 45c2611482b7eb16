// Talks to the backend status endpoint.

use std::error::Error as _;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::model::StatusPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("network request failed")]
    Status(u16),
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    #[error("invalid status payload: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Status(_) | Self::Transport(_) => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        Self::Transport(error_chain(&err))
    }
}

// reqwest keeps the useful part ("Connection refused") in the source chain.
fn error_chain(err: &reqwest::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}

/// Where the status view gets its payload from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<StatusPayload, FetchError>;
}

/// Decodes a status body. Empty and non-JSON bodies are parse errors.
pub fn decode_payload(body: &[u8]) -> Result<StatusPayload, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))
}

pub struct HttpStatusSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpStatusSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = reqwest::Url::parse(url).with_context(|| format!("Invalid status URL {url}"))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<StatusPayload, FetchError> {
        debug!(url = %self.url, "fetching status");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "status endpoint returned an error");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::transport)?;
        decode_payload(&body)
    }
}
