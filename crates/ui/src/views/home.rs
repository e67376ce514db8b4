use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::HomeVm;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = HomeVm::from_clock(ctx.clock());

    rsx! {
        div { class: "page home",
            header { class: "home-header",
                div {
                    p { class: "home-date", "{vm.date_label}" }
                    h2 { class: "home-greeting", "{vm.greeting}" }
                }
                div { class: "avatar", "{vm.avatar_initial}" }
            }
            section { class: "card home-card",
                h3 { "Ready to focus?" }
                p { class: "muted", "Plan a few sessions and let the timer keep you on track." }
                Link { class: "btn btn-primary", to: Route::Study {}, "Plan a study session" }
            }
        }
    }
}
