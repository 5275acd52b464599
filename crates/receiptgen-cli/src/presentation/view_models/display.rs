use serde::Serialize;

/// Feedback for the latest submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub text: String,
    pub is_positive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_text: Option<String>,
}
