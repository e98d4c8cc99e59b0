//! One-shot delayed reset.

use std::time::Duration;

use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Observes a scheduled reset.
///
/// Offers no cancellation: once scheduled, the reset runs.
#[derive(Debug, Clone)]
pub struct ResetHandle {
    done: watch::Receiver<bool>,
}

impl ResetHandle {
    /// True once the reset callback has returned.
    pub fn is_finished(&self) -> bool {
        *self.done.borrow()
    }

    /// Waits until the reset callback has returned.
    pub async fn finished(&mut self) {
        // Err means the task is gone; nothing left to wait for.
        let _ = self.done.wait_for(|done| *done).await;
    }
}

/// Runs `callback` once after `delay` on the current tokio runtime.
///
/// Returns `None`, without running the callback, when called outside a
/// runtime.
pub fn schedule<F>(delay: Duration, callback: F) -> Option<ResetHandle>
where
    F: FnOnce() + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        warn!("no tokio runtime, reset not scheduled");
        return None;
    };

    let (tx, rx) = watch::channel(false);
    debug!("reset scheduled in {:?}", delay);

    runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        callback();
        let _ = tx.send(true);
    });

    Some(ResetHandle { done: rx })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut handle = schedule(Duration::from_millis(3000), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("inside a runtime");

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!handle.is_finished());

        handle.finished().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_finished());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_outside_runtime_is_not_scheduled() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let handle = schedule(Duration::from_millis(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handle.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
