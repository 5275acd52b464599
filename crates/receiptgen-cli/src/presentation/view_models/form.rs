use serde::Serialize;

use super::DisplayState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViewModel {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub focused: bool,
    pub required: bool,
    /// Selector rather than free text
    pub is_choice: bool,
}

/// Everything the interactive form draws in one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormScreenViewModel {
    pub title: &'static str,
    pub fields: Vec<FieldViewModel>,
    /// Last known quota, kept across attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<DisplayState>,
    pub submitting: bool,
    pub submit_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_background: Option<String>,
    pub footer: &'static str,
}
