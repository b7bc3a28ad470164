//! Debounce scheduler for coalesced background saves.
//!
//! Cancel-and-restart semantics: scheduling new work aborts whatever is
//! still pending, so only the last request in any window actually runs.
//! There is never more than one timer in flight.

use std::future::Future;
use std::time::Duration;

use tokio::task::AbortHandle;

/// Owns the single pending debounce task.
pub struct SaveScheduler {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl SaveScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `work` to run after the debounce delay, cancelling any
    /// previously scheduled work first.
    pub fn schedule<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });
        self.pending = Some(task.abort_handle());
    }

    /// Aborts pending work, if any. Superseding writes call this so an
    /// older snapshot can never land after a newer one.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Whether a debounced write is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
