use receiptgen_types::{FormField, ReceiptRequest};

use crate::presentation::view_models::{DisplayState, FieldViewModel, FormScreenViewModel};

const TITLE: &str = "🎨 Generate Receipt";
const FOOTER: &str = "Powered by Receipt Generator Bot";
const SUBMIT_LABEL: &str = "🚀 Generate Receipt";
const SUBMITTING_LABEL: &str = "⏳ Generating...";

/// UI state the form screen is built from
pub struct FormScreenInput<'a> {
    pub form: &'a ReceiptRequest,
    pub focus: FormField,
    pub submitting: bool,
    pub feedback: Option<&'a DisplayState>,
    pub quota_text: Option<&'a str>,
    pub theme_background: Option<&'a str>,
}

pub fn present_form_screen(input: FormScreenInput<'_>) -> FormScreenViewModel {
    let fields = FormField::ALL
        .into_iter()
        .map(|field| FieldViewModel {
            label: field.label(),
            value: match field {
                FormField::TemplateType => input.form.template_type.label().to_string(),
                other => input.form.value(other).to_string(),
            },
            placeholder: field.placeholder(),
            focused: field == input.focus,
            required: field.is_required(),
            is_choice: field == FormField::TemplateType,
        })
        .collect();

    FormScreenViewModel {
        title: TITLE,
        fields,
        quota_text: input.quota_text.map(str::to_string),
        feedback: input.feedback.cloned(),
        submitting: input.submitting,
        submit_label: if input.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        },
        theme_background: input.theme_background.map(str::to_string),
        footer: FOOTER,
    }
}
