//! Client for the remote receipt generation service.

use async_trait::async_trait;
use receiptgen_types::{GenerateRequest, GenerateResponse};
use std::time::Duration;

use crate::Result;

/// Any fault between sending the request and decoding the response.
///
/// Timeouts, DNS failures, refused connections, non-2xx statuses and
/// malformed bodies are not told apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Sends one generation request and returns the decoded response
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> std::result::Result<GenerateResponse, TransportError>;
}

/// [`GenerationService`] over HTTP: a single JSON POST, no retries
pub struct HttpGenerationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> std::result::Result<GenerateResponse, TransportError> {
        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .and_then(|r| r.error_for_status())?;

        let body = response.bytes().await?;
        serde_json::from_slice::<GenerateResponse>(&body)
            .map_err(|e| TransportError(format!("invalid response body: {}", e)))
    }
}
