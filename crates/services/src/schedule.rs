//! Repeating background tick with explicit cancellation.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Cancellation flag shared between a scheduled task and its owner.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A task that calls `on_tick` once per period until the callback breaks or
/// the token is cancelled. Dropping the handle cancels the task.
#[derive(Debug)]
pub struct ScheduledTick {
    token: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTick {
    /// Spawn the tick loop on the current Tokio runtime. The first tick fires
    /// one full period after spawning.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<F>(period: Duration, token: CancelToken, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if task_token.is_cancelled() {
                    break;
                }
                if on_tick().is_break() {
                    task_token.cancel();
                    break;
                }
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// True until the task is cancelled or its callback asked to stop.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.token.is_cancelled()
            && self
                .handle
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ScheduledTick {
    fn drop(&mut self) {
        self.cancel();
    }
}
