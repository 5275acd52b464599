use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use receiptgen_runtime::FormStateStore;
use receiptgen_types::{FormField, ReceiptRequest, SubmissionResult};

use crate::presentation::presenters::{FormScreenInput, present_form_screen, present_submission};
use crate::presentation::view_models::{DisplayState, FormScreenViewModel};

/// What the run loop must do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(ReceiptRequest),
    Quit,
}

pub struct AppState {
    pub store: FormStateStore,
    pub focus: FormField,
    pub submitting: bool,
    pub feedback: Option<DisplayState>,
    /// Last quota reported by the service; results without one keep it
    pub quota_text: Option<String>,
    pub theme_background: Option<String>,
}

impl AppState {
    pub fn new(store: FormStateStore, theme_background: Option<String>) -> Self {
        Self {
            store,
            focus: FormField::MerchantName,
            submitting: false,
            feedback: None,
            quota_text: None,
            theme_background,
        }
    }

    pub fn view_model(&self) -> FormScreenViewModel {
        present_form_screen(FormScreenInput {
            form: self.store.current(),
            focus: self.focus,
            submitting: self.submitting,
            feedback: self.feedback.as_ref(),
            quota_text: self.quota_text.as_deref(),
            theme_background: self.theme_background.as_deref(),
        })
    }

    pub fn focus_next(&mut self) {
        let index = position(self.focus);
        self.focus = FormField::ALL[(index + 1) % FormField::ALL.len()];
    }

    pub fn focus_previous(&mut self) {
        let index = position(self.focus);
        let len = FormField::ALL.len();
        self.focus = FormField::ALL[(index + len - 1) % len];
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Enter => return self.begin_submit(),
            code if self.focus == FormField::TemplateType => self.edit_template(code),
            KeyCode::Backspace => {
                let mut value = self.store.current().value(self.focus).to_string();
                value.pop();
                self.store.update(self.focus, &value);
            }
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
        None
    }

    /// Starts an attempt unless one is already running
    pub fn begin_submit(&mut self) -> Option<Action> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.feedback = None;
        Some(Action::Submit(self.store.snapshot()))
    }

    pub fn apply_result(&mut self, result: Option<SubmissionResult>) {
        let Some(result) = result else {
            self.submitting = false;
            return;
        };
        let display = present_submission(&result);
        if let Some(quota) = &display.quota_text {
            self.quota_text = Some(quota.clone());
        }
        self.feedback = Some(display);
        self.submitting = false;
    }

    fn edit_template(&mut self, code: KeyCode) {
        let current = self.store.current().template_type;
        let next = match code {
            KeyCode::Left => current.previous(),
            KeyCode::Right | KeyCode::Char(' ') => current.next(),
            _ => return,
        };
        self.store.update(FormField::TemplateType, next.as_str());
    }

    fn insert_char(&mut self, c: char) {
        if self.focus == FormField::Amount && !c.is_ascii_digit() {
            return;
        }
        let mut value = self.store.current().value(self.focus).to_string();
        value.push(c);
        self.store.update(self.focus, &value);
    }
}

fn position(field: FormField) -> usize {
    FormField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}
