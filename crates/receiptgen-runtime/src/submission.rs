use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use receiptgen_types::{
    GENERIC_FAILURE_MESSAGE, GenerateRequest, HostIdentity, ReceiptRequest, SubmissionPhase,
    SubmissionResult, UserId, ValidationError,
};

use crate::close::CloseScheduler;
use crate::host::HostPlatform;
use crate::service::GenerationService;

/// Validates, sends and interprets receipt submissions.
///
/// At most one submission is in flight: a call made while another is
/// `Submitting` returns `None` without touching the network.
pub struct SubmissionController {
    service: Arc<dyn GenerationService>,
    host: Option<Arc<dyn HostPlatform>>,
    submitting: AtomicBool,
    auto_close: CloseScheduler,
}

/// Returns the phase to `Idle` when dropped, including when the submit
/// future is dropped mid-request
struct PhaseGuard<'a>(&'a AtomicBool);

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SubmissionController {
    pub fn new(service: Arc<dyn GenerationService>, host: Option<Arc<dyn HostPlatform>>) -> Self {
        Self::with_scheduler(service, host, CloseScheduler::default())
    }

    pub fn with_scheduler(
        service: Arc<dyn GenerationService>,
        host: Option<Arc<dyn HostPlatform>>,
        auto_close: CloseScheduler,
    ) -> Self {
        Self {
            service,
            host,
            submitting: AtomicBool::new(false),
            auto_close,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.submitting.load(Ordering::SeqCst) {
            SubmissionPhase::Submitting
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Local checks run before any network activity; yields the user the
    /// request is sent for
    pub fn validate(
        snapshot: &ReceiptRequest,
        identity: &HostIdentity,
    ) -> Result<UserId, ValidationError> {
        let user_id = identity
            .effective_user_id()
            .ok_or(ValidationError::MissingUserId)?;
        if snapshot.missing_required().is_some() {
            return Err(ValidationError::MissingRequiredField);
        }
        Ok(user_id.clone())
    }

    /// Submits `snapshot` on behalf of `identity`.
    ///
    /// Returns `None` when another submission is still in flight.
    pub async fn submit(
        &self,
        snapshot: &ReceiptRequest,
        identity: &HostIdentity,
    ) -> Option<SubmissionResult> {
        if self.submitting.load(Ordering::SeqCst) {
            tracing::debug!("submit ignored: a submission is already in flight");
            return None;
        }

        let user_id = match Self::validate(snapshot, identity) {
            Ok(user_id) => user_id,
            Err(error) => {
                tracing::info!(%error, "submission rejected locally");
                return Some(error.into());
            }
        };

        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("submit ignored: a submission is already in flight");
            return None;
        }
        let _phase = PhaseGuard(&self.submitting);

        let request = GenerateRequest::new(user_id, snapshot.clone());
        let started = Instant::now();
        tracing::info!(
            template = %snapshot.template_type,
            user_id = %request.user_id,
            "submitting receipt request"
        );

        let result = match self.service.generate(&request).await {
            Ok(response) if response.success => SubmissionResult::Success {
                quota: response.quota,
            },
            Ok(response) => SubmissionResult::ApplicationFailure {
                message: response
                    .error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                quota: response.quota,
            },
            Err(fault) => SubmissionResult::TransportFailure {
                message: fault.to_string(),
            },
        };

        tracing::info!(
            outcome = result.kind(),
            quota = ?result.quota(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "submission finished"
        );

        if result.is_success()
            && let Some(host) = &self.host
        {
            self.auto_close.schedule(host.clone());
        }

        Some(result)
    }

    /// Cancels the pending auto-close; call when the view is torn down
    pub fn shutdown(&self) {
        self.auto_close.shutdown();
    }
}
