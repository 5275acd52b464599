use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio_util::sync::{CancellationToken, DropGuard};

use crate::host::HostPlatform;

/// Delay between a successful submission and the host close request
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(2000);

/// One-shot deferred host close, cancelled on teardown.
///
/// Every scheduled close is a child of a root token; dropping the scheduler
/// or calling [`CloseScheduler::shutdown`] cancels all of them.
pub struct CloseScheduler {
    delay: Duration,
    root: CancellationToken,
    pending: Mutex<Option<CancellationToken>>,
    _guard: DropGuard,
}

impl CloseScheduler {
    pub fn new(delay: Duration) -> Self {
        let root = CancellationToken::new();
        Self {
            delay,
            _guard: root.clone().drop_guard(),
            root,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `host.close()` after the delay, replacing any pending close.
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, host: Arc<dyn HostPlatform>) {
        let token = self.root.child_token();
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());
        if let Some(previous) = previous {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("auto-close cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    tracing::debug!(delay_ms = delay.as_millis() as u64, "auto-close firing");
                    host.close();
                }
            }
        });
    }

    /// Cancels the pending close, if any
    pub fn cancel(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(token) = pending {
            token.cancel();
        }
    }

    /// Cancels pending and future closes; used on view teardown
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Default for CloseScheduler {
    fn default() -> Self {
        Self::new(AUTO_CLOSE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receiptgen_types::UserId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingHost {
        closes: AtomicUsize,
    }

    impl HostPlatform for CountingHost {
        fn ready(&self) {}
        fn expand(&self) {}
        fn theme_background(&self) -> Option<String> {
            None
        }
        fn authenticated_user_id(&self) -> Option<UserId> {
            None
        }
        fn close(&self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_fires_at_delay_and_not_before() {
        let host = Arc::new(CountingHost::default());
        let scheduler = CloseScheduler::default();

        scheduler.schedule(host.clone());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_close() {
        let host = Arc::new(CountingHost::default());
        let scheduler = CloseScheduler::default();

        scheduler.schedule(host.clone());
        scheduler.cancel();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_close() {
        let host = Arc::new(CountingHost::default());
        let scheduler = CloseScheduler::default();

        scheduler.schedule(host.clone());
        drop(scheduler);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_close() {
        let host = Arc::new(CountingHost::default());
        let scheduler = CloseScheduler::default();

        scheduler.schedule(host.clone());
        tokio::time::sleep(Duration::from_millis(1000)).await;
        scheduler.schedule(host.clone());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_after_shutdown_never_fires() {
        let host = Arc::new(CountingHost::default());
        let scheduler = CloseScheduler::default();

        scheduler.shutdown();
        assert!(scheduler.is_shut_down());
        scheduler.schedule(host.clone());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(host.closes.load(Ordering::SeqCst), 0);
    }
}
