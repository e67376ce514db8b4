use std::collections::BTreeSet;

use crate::model::SessionPlan;

/// Mutable progress record for an active run.
///
/// All fields are zero (and `started` is false) before a run starts and after
/// it is cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    started: bool,
    current_session: u32,
    time_left_secs: u32,
    completed: BTreeSet<u32>,
}

impl RunState {
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn current_session(&self) -> u32 {
        self.current_session
    }

    #[must_use]
    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<u32> {
        &self.completed
    }
}

/// What a single tick did to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to count: the run is idle or already complete.
    Ignored,
    Counted,
    /// A non-final session reached zero and the next one began.
    SessionFinished(u32),
    /// The final session reached zero. No further ticks are needed.
    RunFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Done,
    Active,
    Pending,
}

/// Countdown state machine for a plan's sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRun {
    plan: Option<SessionPlan>,
    state: RunState,
}

impl SessionRun {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Begin a fresh run of `plan`, discarding any previous progress.
    pub fn start(&mut self, plan: SessionPlan) {
        self.plan = Some(plan);
        self.state = RunState {
            started: true,
            current_session: 0,
            time_left_secs: plan.session_secs(),
            completed: BTreeSet::new(),
        };
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(plan) = self.plan else {
            return TickOutcome::Ignored;
        };
        if !self.state.started || self.is_complete() {
            return TickOutcome::Ignored;
        }

        self.state.time_left_secs = self.state.time_left_secs.saturating_sub(1);
        if self.state.time_left_secs > 0 {
            return TickOutcome::Counted;
        }

        let finished = self.state.current_session;
        self.state.completed.insert(finished);
        self.state.current_session += 1;
        self.state.time_left_secs = plan.session_secs();

        if self.state.current_session >= plan.sessions() {
            TickOutcome::RunFinished
        } else {
            TickOutcome::SessionFinished(finished)
        }
    }

    /// Drop all progress and the plan. Valid at any point.
    pub fn cancel(&mut self) {
        self.plan = None;
        self.state = RunState::default();
    }

    #[must_use]
    pub fn plan(&self) -> Option<&SessionPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &RunState {
        &self.state
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.started()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plan
            .is_some_and(|plan| self.state.started && self.state.current_session >= plan.sessions())
    }

    #[must_use]
    pub fn current_session(&self) -> u32 {
        self.state.current_session()
    }

    #[must_use]
    pub fn time_left_secs(&self) -> u32 {
        self.state.time_left_secs()
    }

    #[must_use]
    pub fn completed_sessions(&self) -> &BTreeSet<u32> {
        self.state.completed()
    }

    /// Share of the whole run already elapsed, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let Some(plan) = self.plan else {
            return 0.0;
        };
        if !self.state.started {
            return 0.0;
        }
        let session_secs = f64::from(plan.session_secs());
        let total = f64::from(plan.total_secs());
        let elapsed = f64::from(self.state.current_session) * session_secs
            + (session_secs - f64::from(self.state.time_left_secs));
        elapsed / total * 100.0
    }

    #[must_use]
    pub fn session_status(&self, index: u32) -> SessionStatus {
        if self.state.completed.contains(&index) {
            SessionStatus::Done
        } else if self.state.started && index == self.state.current_session {
            SessionStatus::Active
        } else {
            SessionStatus::Pending
        }
    }
}
