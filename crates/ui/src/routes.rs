use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use study_core::model::ThemePreference;

use crate::context::AppContext;
use crate::views::{HomeView, StudyView};
use crate::vm::{theme_class, theme_options};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/study", StudyView)] Study {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme();
    let preference = use_signal(|| theme.preference());

    use_future(move || {
        let mut updates = theme.subscribe();
        let mut preference = preference;
        async move {
            while updates.changed().await.is_ok() {
                let next = *updates.borrow_and_update();
                preference.set(next);
            }
        }
    });

    let root_class = theme_class(preference());

    rsx! {
        div { class: "app {root_class}",
            Sidebar { preference: preference() }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar(preference: ThemePreference) -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Study" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Study {}, "Study" } }
            }
            ThemeSwitcher { preference }
        }
    }
}

#[component]
fn ThemeSwitcher(preference: ThemePreference) -> Element {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme();
    let on_select = use_callback(move |choice: ThemePreference| {
        let theme = theme.clone();
        spawn(async move {
            // The service logs write failures and keeps the previous preference.
            let _ = theme.set_preference(choice).await;
        });
    });

    rsx! {
        div { class: "theme-switcher", role: "radiogroup",
            span { class: "theme-switcher__label", "Theme" }
            for option in theme_options(preference) {
                button {
                    key: "{option.value}",
                    r#type: "button",
                    class: if option.selected { "theme-option theme-option--active" } else { "theme-option" },
                    aria_checked: option.selected,
                    onclick: move |_| on_select.call(option.value),
                    "{option.label}"
                }
            }
        }
    }
}
