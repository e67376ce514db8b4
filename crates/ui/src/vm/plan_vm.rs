use study_core::model::{DURATION_CHOICES, MAX_SESSIONS, PlanDraft, Subject, TaskKind};

use crate::vm::time_fmt::format_date_input;

/// One selectable pill or tile in the plan form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm<T> {
    pub value: T,
    pub label: String,
    pub icon: &'static str,
    pub selected: bool,
}

/// Everything the plan form renders, derived from the current draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanFormVm {
    pub date_input: String,
    pub durations: Vec<ChoiceVm<u32>>,
    pub sessions: Vec<ChoiceVm<u32>>,
    pub tasks: Vec<ChoiceVm<TaskKind>>,
    pub subjects: Vec<ChoiceVm<Subject>>,
    pub can_start: bool,
}

impl PlanFormVm {
    #[must_use]
    pub fn from_draft(draft: &PlanDraft) -> Self {
        let durations = DURATION_CHOICES
            .iter()
            .map(|&minutes| ChoiceVm {
                value: minutes,
                label: format!("{minutes} min"),
                icon: "",
                selected: draft.duration_minutes == Some(minutes),
            })
            .collect();
        let sessions = (1..=MAX_SESSIONS)
            .map(|count| ChoiceVm {
                value: count,
                label: count.to_string(),
                icon: "",
                selected: draft.sessions == Some(count),
            })
            .collect();
        let tasks = TaskKind::ALL
            .iter()
            .map(|&task| ChoiceVm {
                value: task,
                label: task.label().to_string(),
                icon: task_icon(task),
                selected: draft.task == Some(task),
            })
            .collect();
        let subjects = Subject::ALL
            .iter()
            .map(|&subject| ChoiceVm {
                value: subject,
                label: subject.label().to_string(),
                icon: subject_icon(subject),
                selected: draft.subject == Some(subject),
            })
            .collect();

        Self {
            date_input: draft.date.map(format_date_input).unwrap_or_default(),
            durations,
            sessions,
            tasks,
            subjects,
            can_start: draft.is_complete(),
        }
    }
}

#[must_use]
pub fn task_icon(task: TaskKind) -> &'static str {
    match task {
        TaskKind::Read => "📖",
        TaskKind::Code => "💻",
        TaskKind::Tutorial => "▶",
        TaskKind::Listen => "🎧",
    }
}

#[must_use]
pub fn subject_icon(subject: Subject) -> &'static str {
    match subject {
        Subject::React => "⚛",
        Subject::JavaScript => "🟨",
        Subject::Python => "🐍",
        Subject::Dsa => "🌿",
    }
}
