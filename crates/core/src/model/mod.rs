mod plan;
mod run;
mod theme;

pub use plan::{
    DURATION_CHOICES, MAX_SESSIONS, PlanDraft, PlanError, PlanField, SessionPlan, Subject,
    TaskKind,
};
pub use run::{RunState, SessionRun, SessionStatus, TickOutcome};
pub use theme::{ColorScheme, THEME_PREFERENCE_KEY, ThemeError, ThemePreference};
