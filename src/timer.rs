//! One-shot delayed callbacks on a tokio runtime.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Schedules callbacks to run once after a fixed delay.
#[derive(Clone, Debug)]
pub struct DelayScheduler {
    runtime: Handle,
    delay: Duration,
}

impl DelayScheduler {
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        Self { runtime, delay }
    }

    /// Scheduler on the runtime of the calling task.
    ///
    /// Panics when called outside a tokio runtime, like `Handle::current`.
    pub fn current(delay: Duration) -> Self {
        Self::new(Handle::current(), delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `callback` once after the delay. Does not block the caller.
    pub fn schedule<F>(&self, callback: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        tracing::trace!(delay_ms = delay.as_millis() as u64, "timer scheduled");
        TimerHandle {
            abort: task.abort_handle(),
        }
    }
}

/// Handle to a scheduled callback.
#[derive(Debug)]
pub struct TimerHandle {
    abort: AbortHandle,
}

impl TimerHandle {
    /// Prevent the callback from running.
    ///
    /// No-op if it already ran or was already cancelled.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// True once the callback has run or the timer was cancelled.
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}
