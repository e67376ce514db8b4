use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes a single study session can last.
pub const DURATION_CHOICES: [u32; 8] = [1, 5, 10, 20, 30, 40, 50, 60];

/// Upper bound for sessions in one plan.
pub const MAX_SESSIONS: u32 = 10;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("{0} is required")]
    Missing(PlanField),

    #[error("unsupported session duration: {0} min")]
    UnsupportedDuration(u32),

    #[error("session count must be between 1 and 10, got {0}")]
    SessionCountOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanField {
    Date,
    Duration,
    Sessions,
    Task,
    Subject,
}

impl std::fmt::Display for PlanField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlanField::Date => "date",
            PlanField::Duration => "duration",
            PlanField::Sessions => "session count",
            PlanField::Task => "task",
            PlanField::Subject => "subject",
        };
        f.write_str(name)
    }
}

/// What the user intends to do during the sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    Read,
    Code,
    Tutorial,
    Listen,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Read,
        TaskKind::Code,
        TaskKind::Tutorial,
        TaskKind::Listen,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Read => "Read",
            TaskKind::Code => "Code",
            TaskKind::Tutorial => "Tutorial",
            TaskKind::Listen => "Listen",
        }
    }
}

/// Topic being studied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    React,
    JavaScript,
    Python,
    Dsa,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::React,
        Subject::JavaScript,
        Subject::Python,
        Subject::Dsa,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Subject::React => "React",
            Subject::JavaScript => "JavaScript",
            Subject::Python => "Python",
            Subject::Dsa => "DSA",
        }
    }
}

/// Form-side plan where every field may still be unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanDraft {
    pub date: Option<NaiveDate>,
    pub duration_minutes: Option<u32>,
    pub sessions: Option<u32>,
    pub task: Option<TaskKind>,
    pub subject: Option<Subject>,
}

impl PlanDraft {
    /// The form's initial selection for the given day.
    #[must_use]
    pub fn defaults_for(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            duration_minutes: Some(DURATION_CHOICES[0]),
            sessions: Some(1),
            task: Some(TaskKind::Read),
            subject: Some(Subject::React),
        }
    }

    /// Validate the draft into an immutable plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Missing` for the first unset field, or a range error
    /// when duration or session count fall outside the allowed choices.
    pub fn validate(&self) -> Result<SessionPlan, PlanError> {
        let date = self.date.ok_or(PlanError::Missing(PlanField::Date))?;
        let duration_minutes = self
            .duration_minutes
            .ok_or(PlanError::Missing(PlanField::Duration))?;
        let sessions = self
            .sessions
            .ok_or(PlanError::Missing(PlanField::Sessions))?;
        let task = self.task.ok_or(PlanError::Missing(PlanField::Task))?;
        let subject = self.subject.ok_or(PlanError::Missing(PlanField::Subject))?;

        SessionPlan::new(date, duration_minutes, sessions, task, subject)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Validated study plan. Immutable once a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    date: NaiveDate,
    duration_minutes: u32,
    sessions: u32,
    task: TaskKind,
    subject: Subject,
}

impl SessionPlan {
    /// # Errors
    ///
    /// Returns `PlanError::UnsupportedDuration` if `duration_minutes` is not one
    /// of `DURATION_CHOICES`, or `PlanError::SessionCountOutOfRange` if
    /// `sessions` is not in `1..=MAX_SESSIONS`.
    pub fn new(
        date: NaiveDate,
        duration_minutes: u32,
        sessions: u32,
        task: TaskKind,
        subject: Subject,
    ) -> Result<Self, PlanError> {
        if !DURATION_CHOICES.contains(&duration_minutes) {
            return Err(PlanError::UnsupportedDuration(duration_minutes));
        }
        if !(1..=MAX_SESSIONS).contains(&sessions) {
            return Err(PlanError::SessionCountOutOfRange(sessions));
        }

        Ok(Self {
            date,
            duration_minutes,
            sessions,
            task,
            subject,
        })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    #[must_use]
    pub fn task(&self) -> TaskKind {
        self.task
    }

    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    /// Length of one session in seconds.
    #[must_use]
    pub fn session_secs(&self) -> u32 {
        self.duration_minutes * 60
    }

    /// Length of the whole run in seconds.
    #[must_use]
    pub fn total_secs(&self) -> u32 {
        self.sessions * self.session_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn defaults_validate() {
        let plan = PlanDraft::defaults_for(day()).validate().unwrap();
        assert_eq!(plan.duration_minutes(), 1);
        assert_eq!(plan.sessions(), 1);
        assert_eq!(plan.task(), TaskKind::Read);
        assert_eq!(plan.subject(), Subject::React);
        assert_eq!(plan.session_secs(), 60);
    }

    #[test]
    fn draft_reports_first_missing_field() {
        let mut draft = PlanDraft::defaults_for(day());
        draft.sessions = None;
        draft.subject = None;
        assert_eq!(
            draft.validate().unwrap_err(),
            PlanError::Missing(PlanField::Sessions)
        );
        assert!(!draft.is_complete());

        assert_eq!(
            PlanDraft::default().validate().unwrap_err(),
            PlanError::Missing(PlanField::Date)
        );
    }

    #[test]
    fn rejects_duration_outside_choices() {
        let err = SessionPlan::new(day(), 15, 2, TaskKind::Code, Subject::Python).unwrap_err();
        assert_eq!(err, PlanError::UnsupportedDuration(15));
    }

    #[test]
    fn rejects_session_count_out_of_range() {
        let err = SessionPlan::new(day(), 5, 0, TaskKind::Code, Subject::Python).unwrap_err();
        assert_eq!(err, PlanError::SessionCountOutOfRange(0));

        let err = SessionPlan::new(day(), 5, 11, TaskKind::Code, Subject::Python).unwrap_err();
        assert_eq!(err, PlanError::SessionCountOutOfRange(11));
    }

    #[test]
    fn total_secs_covers_every_session() {
        let plan = SessionPlan::new(day(), 20, 3, TaskKind::Listen, Subject::Dsa).unwrap();
        assert_eq!(plan.total_secs(), 3 * 20 * 60);
    }

    #[test]
    fn labels_match_choice_names() {
        assert_eq!(Subject::Dsa.label(), "DSA");
        assert_eq!(Subject::JavaScript.label(), "JavaScript");
        assert_eq!(TaskKind::Tutorial.label(), "Tutorial");
    }
}
