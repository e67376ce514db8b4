use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use study_core::model::{SessionPlan, SessionRun, TickOutcome};
use tokio::sync::watch;
use tracing::debug;

use crate::schedule::{CancelToken, ScheduledTick};

/// Default interval between countdown ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Copy of the run published to subscribers after every change.
pub type RunSnapshot = SessionRun;

/// Drives a `SessionRun` with a repeating tick task.
///
/// The tick task is cancelled when the run completes, when `cancel` is
/// called, and when the timer is dropped.
pub struct SessionTimer {
    tick_period: Duration,
    run: Arc<Mutex<SessionRun>>,
    updates: Arc<watch::Sender<RunSnapshot>>,
    ticker: Mutex<Option<ScheduledTick>>,
}

impl SessionTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_tick_period(DEFAULT_TICK_PERIOD)
    }

    #[must_use]
    pub fn with_tick_period(tick_period: Duration) -> Self {
        let (updates, _) = watch::channel(SessionRun::idle());
        Self {
            tick_period,
            run: Arc::new(Mutex::new(SessionRun::idle())),
            updates: Arc::new(updates),
            ticker: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Start a fresh run of `plan`, replacing any run in progress.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start(&self, plan: SessionPlan) {
        let mut ticker = lock(&self.ticker);
        if let Some(mut previous) = ticker.take() {
            previous.cancel();
        }

        {
            let mut run = lock(&self.run);
            run.start(plan);
            self.updates.send_replace(run.clone());
        }
        debug!(
            sessions = plan.sessions(),
            duration_minutes = plan.duration_minutes(),
            "study run started"
        );

        let token = CancelToken::new();
        let task_token = token.clone();
        let run = Arc::clone(&self.run);
        let updates = Arc::clone(&self.updates);
        *ticker = Some(ScheduledTick::spawn(self.tick_period, token, move || {
            let mut run = lock(&run);
            // A cancel may have landed between the timer firing and taking the lock.
            if task_token.is_cancelled() {
                return ControlFlow::Break(());
            }
            let outcome = run.tick();
            updates.send_replace(run.clone());

            match outcome {
                TickOutcome::Counted => ControlFlow::Continue(()),
                TickOutcome::SessionFinished(index) => {
                    debug!(session = index, "study session finished");
                    ControlFlow::Continue(())
                }
                TickOutcome::RunFinished => {
                    debug!("study run complete");
                    ControlFlow::Break(())
                }
                TickOutcome::Ignored => ControlFlow::Break(()),
            }
        }));
    }

    /// Stop ticking and reset the run to its zero state.
    pub fn cancel(&self) {
        let mut ticker = lock(&self.ticker);
        if let Some(mut pending) = ticker.take() {
            pending.cancel();
        }

        let mut run = lock(&self.run);
        if run.is_started() {
            debug!("study run cancelled");
        }
        run.cancel();
        self.updates.send_replace(run.clone());
    }

    #[must_use]
    pub fn snapshot(&self) -> RunSnapshot {
        lock(&self.run).clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RunSnapshot> {
        self.updates.subscribe()
    }

    /// True while a tick task is scheduled.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        lock(&self.ticker)
            .as_ref()
            .is_some_and(ScheduledTick::is_pending)
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        let ticker = self
            .ticker
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(mut pending) = ticker.take() {
            pending.cancel();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use study_core::model::{Subject, TaskKind};

    fn plan(sessions: u32) -> SessionPlan {
        SessionPlan::new(
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            1,
            sessions,
            TaskKind::Code,
            Subject::Python,
        )
        .unwrap()
    }

    #[test]
    fn new_timer_is_idle() {
        let timer = SessionTimer::new();
        assert_eq!(timer.tick_period(), Duration::from_secs(1));
        assert_eq!(timer.snapshot(), SessionRun::idle());
        assert!(!timer.is_ticking());
    }

    #[tokio::test]
    async fn start_publishes_fresh_run() {
        let timer = SessionTimer::with_tick_period(Duration::from_secs(60));
        let updates = timer.subscribe();
        timer.start(plan(2));

        let published = updates.borrow().clone();
        assert!(published.is_started());
        assert_eq!(published.time_left_secs(), 60);
        assert!(timer.is_ticking());
    }

    #[tokio::test]
    async fn cancel_resets_and_stops_ticking() {
        let timer = SessionTimer::with_tick_period(Duration::from_secs(60));
        timer.start(plan(2));
        timer.cancel();

        assert!(!timer.is_ticking());
        assert_eq!(timer.snapshot(), SessionRun::idle());
        assert_eq!(*timer.subscribe().borrow(), SessionRun::idle());
    }
}
