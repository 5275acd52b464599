use serde::{Deserialize, Serialize};

/// Remaining-usage counter reported by the generation service
pub type Quota = i64;

/// Fallback text when the service reports failure without an error message
pub const GENERIC_FAILURE_MESSAGE: &str = "Terjadi kesalahan";

/// Local rejection detected before any network activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("User ID tidak ditemukan!")]
    MissingUserId,
    #[error("Mohon isi semua field!")]
    MissingRequiredField,
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// Service accepted the request and delivered the receipt
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        quota: Option<Quota>,
    },
    /// Service answered with `success: false`
    ApplicationFailure {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        quota: Option<Quota>,
    },
    /// Network fault, non-2xx status, or unreadable body
    TransportFailure { message: String },
    /// Rejected locally; no request was sent
    Invalid { error: ValidationError },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    /// Quota carried by this outcome, success or not
    pub fn quota(&self) -> Option<Quota> {
        match self {
            SubmissionResult::Success { quota } => *quota,
            SubmissionResult::ApplicationFailure { quota, .. } => *quota,
            SubmissionResult::TransportFailure { .. } | SubmissionResult::Invalid { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionResult::Success { .. } => "success",
            SubmissionResult::ApplicationFailure { .. } => "application_failure",
            SubmissionResult::TransportFailure { .. } => "transport_failure",
            SubmissionResult::Invalid { .. } => "invalid",
        }
    }
}

impl From<ValidationError> for SubmissionResult {
    fn from(error: ValidationError) -> Self {
        SubmissionResult::Invalid { error }
    }
}

/// Whether a request is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }
}
