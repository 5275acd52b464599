//! Host platform double.

use receiptgen_runtime::HostPlatform;
use receiptgen_types::UserId;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Host with fixed context that counts lifecycle calls
#[derive(Default)]
pub struct RecordingHost {
    user_id: Option<UserId>,
    theme_background: Option<String>,
    ready_calls: AtomicUsize,
    expand_calls: AtomicUsize,
    close_calls: AtomicUsize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_theme(mut self, background: &str) -> Self {
        self.theme_background = Some(background.to_string());
        self
    }

    pub fn ready_calls(&self) -> usize {
        self.ready_calls.load(Ordering::SeqCst)
    }

    pub fn expand_calls(&self) -> usize {
        self.expand_calls.load(Ordering::SeqCst)
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

impl HostPlatform for RecordingHost {
    fn ready(&self) {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn expand(&self) {
        self.expand_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn theme_background(&self) -> Option<String> {
        self.theme_background.clone()
    }

    fn authenticated_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }

    fn close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}
