use dioxus::prelude::*;
use study_core::model::{PlanDraft, SessionPlan, Subject, TaskKind};

use crate::vm::{PlanFormVm, parse_date_input};

#[component]
pub(super) fn PlanForm(draft: Signal<PlanDraft>, on_start: EventHandler<SessionPlan>) -> Element {
    let mut draft = draft;
    let vm = PlanFormVm::from_draft(&draft.read());

    let select_duration = use_callback(move |minutes: u32| {
        draft.write().duration_minutes = Some(minutes);
    });
    let select_sessions = use_callback(move |count: u32| {
        draft.write().sessions = Some(count);
    });
    let select_task = use_callback(move |task: TaskKind| {
        draft.write().task = Some(task);
    });
    let select_subject = use_callback(move |subject: Subject| {
        draft.write().subject = Some(subject);
    });

    rsx! {
        div { class: "plan-form",
            h2 { "Plan your session" }

            section { class: "form-section",
                label { class: "form-label", r#for: "plan-date", "Date" }
                input {
                    id: "plan-date",
                    class: "input",
                    r#type: "date",
                    value: "{vm.date_input}",
                    oninput: move |evt| {
                        draft.write().date = parse_date_input(&evt.value());
                    },
                }
            }

            section { class: "form-section",
                h3 { class: "form-label", "Duration" }
                div { class: "pill-row",
                    for choice in vm.durations.clone() {
                        Pill {
                            key: "{choice.value}",
                            label: choice.label.clone(),
                            selected: choice.selected,
                            on_select: move |()| select_duration.call(choice.value),
                        }
                    }
                }
            }

            section { class: "form-section",
                h3 { class: "form-label", "Sessions" }
                div { class: "pill-row",
                    for choice in vm.sessions.clone() {
                        Pill {
                            key: "{choice.value}",
                            label: choice.label.clone(),
                            selected: choice.selected,
                            on_select: move |()| select_sessions.call(choice.value),
                        }
                    }
                }
            }

            section { class: "form-section",
                h3 { class: "form-label", "Task" }
                div { class: "tile-grid",
                    for choice in vm.tasks.clone() {
                        Tile {
                            key: "{choice.label}",
                            label: choice.label.clone(),
                            icon: choice.icon,
                            selected: choice.selected,
                            on_select: move |()| select_task.call(choice.value),
                        }
                    }
                }
            }

            section { class: "form-section",
                h3 { class: "form-label", "Subject" }
                div { class: "tile-grid",
                    for choice in vm.subjects.clone() {
                        Tile {
                            key: "{choice.label}",
                            label: choice.label.clone(),
                            icon: choice.icon,
                            selected: choice.selected,
                            on_select: move |()| select_subject.call(choice.value),
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary btn-start",
                r#type: "button",
                disabled: !vm.can_start,
                onclick: move |_| {
                    if let Ok(plan) = draft.read().validate() {
                        on_start.call(plan);
                    }
                },
                "▶ Start Session"
            }
        }
    }
}

#[component]
fn Pill(label: String, selected: bool, on_select: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if selected { "pill pill--selected" } else { "pill" },
            aria_pressed: selected,
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}

#[component]
fn Tile(label: String, icon: &'static str, selected: bool, on_select: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if selected { "tile tile--selected" } else { "tile" },
            aria_pressed: selected,
            onclick: move |_| on_select.call(()),
            span { class: "tile__icon", "{icon}" }
            span { class: "tile__label", "{label}" }
        }
    }
}
