//! Cancellable debounce timer
//!
//! Each `schedule` call replaces the previous one: a timer that has not fired
//! yet is cancelled, so only the last task of a burst runs. A task whose timer
//! already fired keeps running; callers filter its result instead.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

pub struct Debouncer {
    delay: Duration,
    handle: Handle,
    /// Token of the most recently scheduled timer
    pending: Option<CancellationToken>,
}

impl Debouncer {
    /// Create a debouncer that spawns its timers on `handle`
    pub fn new(delay: Duration, handle: Handle) -> Self {
        Self {
            delay,
            handle,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `task` once the delay elapses without another `schedule` or `cancel`
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let timer_token = token.clone();
        let delay = self.delay;

        self.handle.spawn(async move {
            tokio::select! {
                _ = timer_token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Fired: later cancels no longer apply to this task
                    timer_token.cancel();
                    task.await;
                }
            }
        });

        self.pending = Some(token);
    }

    /// Cancel the pending timer, if any. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    /// Whether a timer is scheduled and has not fired or been cancelled
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
