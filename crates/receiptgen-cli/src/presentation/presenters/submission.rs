use receiptgen_types::SubmissionResult;

use crate::presentation::view_models::DisplayState;

pub const SUCCESS_TEXT: &str = "✅ Receipt berhasil dikirim ke Telegram!";
pub const PENDING_TEXT: &str = "⏳ Generating receipt...";

pub fn present_submission(result: &SubmissionResult) -> DisplayState {
    let text = match result {
        SubmissionResult::Success { .. } => SUCCESS_TEXT.to_string(),
        SubmissionResult::ApplicationFailure { message, .. } => format!("❌ {}", message),
        SubmissionResult::TransportFailure { message } => format!("❌ Koneksi gagal: {}", message),
        SubmissionResult::Invalid { error } => format!("❌ {}", error),
    };

    DisplayState {
        text,
        is_positive: result.is_success(),
        quota_text: result.quota().map(|quota| quota.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receiptgen_types::ValidationError;

    #[test]
    fn test_success_is_positive_with_quota() {
        let display = present_submission(&SubmissionResult::Success { quota: Some(5) });
        assert!(display.is_positive);
        assert_eq!(display.text, SUCCESS_TEXT);
        assert_eq!(display.quota_text.as_deref(), Some("5"));
    }

    #[test]
    fn test_application_failure_still_shows_quota() {
        let display = present_submission(&SubmissionResult::ApplicationFailure {
            message: "Kuota habis".to_string(),
            quota: Some(0),
        });
        assert!(!display.is_positive);
        assert_eq!(display.text, "❌ Kuota habis");
        assert_eq!(display.quota_text.as_deref(), Some("0"));
    }

    #[test]
    fn test_transport_failure_has_no_quota() {
        let display = present_submission(&SubmissionResult::TransportFailure {
            message: "connection refused".to_string(),
        });
        assert!(!display.is_positive);
        assert_eq!(display.text, "❌ Koneksi gagal: connection refused");
        assert_eq!(display.quota_text, None);
    }

    #[test]
    fn test_validation_failure_message() {
        let display = present_submission(&SubmissionResult::Invalid {
            error: ValidationError::MissingRequiredField,
        });
        assert!(!display.is_positive);
        assert_eq!(display.text, "❌ Mohon isi semua field!");
    }

    #[test]
    fn test_positivity_ignores_message_text() {
        // A service message that looks like success must not flip the tone
        let display = present_submission(&SubmissionResult::ApplicationFailure {
            message: "✅ berhasil".to_string(),
            quota: None,
        });
        assert!(!display.is_positive);
    }
}
