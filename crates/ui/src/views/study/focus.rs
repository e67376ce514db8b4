use dioxus::prelude::*;

use crate::vm::FocusVm;

#[component]
pub(crate) fn FocusPanel(focus: FocusVm, on_end: EventHandler<()>) -> Element {
    let progress_style = focus.progress_style();
    let timer_class = focus.timer_class();

    rsx! {
        div { class: "focus",
            section { class: "card focus-summary",
                p { class: "muted", "{focus.date_label}" }
                h2 { class: "focus-subject",
                    span { class: "focus-subject__icon", "{focus.subject_icon}" }
                    "{focus.subject_line}"
                }
                p { class: "focus-plan",
                    span { class: "focus-plan__icon", "{focus.task_icon}" }
                    "{focus.plan_line}"
                }
            }

            section { class: "focus-progress",
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{progress_style}" }
                }
                p { class: "progress-label", "{focus.progress_label}" }
            }

            section { class: "card focus-timer",
                p { class: "session-label", "{focus.session_label}" }
                p { class: "{timer_class}", "{focus.timer_text}" }
                if focus.complete {
                    p { class: "focus-done", "All sessions completed!" }
                }
            }

            section { class: "session-grid",
                for tile in focus.tiles.iter() {
                    div {
                        key: "{tile.number}",
                        class: tile.class(),
                        "{tile.number}"
                    }
                }
            }

            button {
                class: "btn btn-danger",
                r#type: "button",
                onclick: move |_| on_end.call(()),
                "End Session"
            }
        }
    }
}
