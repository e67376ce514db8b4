use study_core::model::{SessionRun, SessionStatus};

use crate::vm::plan_vm::{subject_icon, task_icon};
use crate::vm::time_fmt::{format_countdown, format_short_date};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTileVm {
    pub number: u32,
    pub status: SessionStatus,
}

impl SessionTileVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            SessionStatus::Done => "session-tile session-tile--done",
            SessionStatus::Active => "session-tile session-tile--active",
            SessionStatus::Pending => "session-tile session-tile--pending",
        }
    }
}

/// Focus-mode screen state for a started run.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusVm {
    pub date_label: String,
    pub subject_line: String,
    pub subject_icon: &'static str,
    pub task_icon: &'static str,
    pub plan_line: String,
    pub progress_percent: f64,
    pub progress_label: String,
    pub session_label: String,
    pub timer_text: String,
    pub complete: bool,
    pub tiles: Vec<SessionTileVm>,
}

impl FocusVm {
    /// Returns `None` while no run is started.
    #[must_use]
    pub fn from_run(run: &SessionRun) -> Option<Self> {
        let plan = run.plan().copied()?;
        if !run.is_started() {
            return None;
        }

        let complete = run.is_complete();
        let progress_percent = run.progress_percent().clamp(0.0, 100.0);
        let (session_label, timer_text) = if complete {
            ("Complete".to_string(), "🎉".to_string())
        } else {
            (
                format!("Session {}", run.current_session() + 1),
                format_countdown(run.time_left_secs()),
            )
        };
        let tiles = (0..plan.sessions())
            .map(|index| SessionTileVm {
                number: index + 1,
                status: run.session_status(index),
            })
            .collect();

        Some(Self {
            date_label: format_short_date(plan.date()),
            subject_line: format!("{} • {}", plan.subject().label(), plan.task().label()),
            subject_icon: subject_icon(plan.subject()),
            task_icon: task_icon(plan.task()),
            plan_line: format!(
                "{} sessions × {} min",
                plan.sessions(),
                plan.duration_minutes()
            ),
            progress_percent,
            progress_label: format!("{}% Complete", progress_percent.round()),
            session_label,
            timer_text,
            complete,
            tiles,
        })
    }

    /// Inline style for the progress bar fill.
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%", self.progress_percent)
    }

    #[must_use]
    pub fn timer_class(&self) -> &'static str {
        if self.complete {
            "timer-text timer-text--done"
        } else {
            "timer-text timer-text--pulse"
        }
    }
}
