//! Scripted in-process generation service.

use async_trait::async_trait;
use receiptgen_runtime::{GenerationService, TransportError};
use receiptgen_types::{GenerateRequest, GenerateResponse, Quota};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

type Reply = Result<GenerateResponse, TransportError>;

/// Generation service double that returns a fixed reply and records every
/// request it receives.
///
/// A held service parks each call after recording it until [`release`] is
/// called, which lets tests observe the controller while it is `Submitting`.
///
/// [`release`]: MockGenerationService::release
pub struct MockGenerationService {
    reply: Reply,
    requests: Mutex<Vec<GenerateRequest>>,
    held: bool,
    started: Notify,
    release: Notify,
}

impl MockGenerationService {
    pub fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
            held: false,
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn success(quota: Quota) -> Self {
        Self::with_reply(Ok(GenerateResponse {
            success: true,
            quota: Some(quota),
            error: None,
        }))
    }

    pub fn failure(message: &str, quota: Option<Quota>) -> Self {
        Self::with_reply(Ok(GenerateResponse {
            success: false,
            quota,
            error: Some(message.to_string()),
        }))
    }

    pub fn transport_error(message: &str) -> Self {
        Self::with_reply(Err(TransportError(message.to_string())))
    }

    /// Park each call until [`MockGenerationService::release`]
    pub fn held(mut self) -> Self {
        self.held = true;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Resolves once a request has been received
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Lets one parked call return its reply
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for MockGenerationService {
    async fn generate(&self, request: &GenerateRequest) -> Reply {
        self.requests.lock().unwrap().push(request.clone());
        self.started.notify_one();

        if self.held {
            self.release.notified().await;
        }

        self.reply.clone()
    }
}
