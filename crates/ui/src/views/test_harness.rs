use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, RunSnapshot, SessionTimer, ThemeService};
use storage::repository::{PreferenceRepository, Storage};
use study_core::model::SessionPlan;
use study_core::time::fixed_now;
use tokio::sync::watch;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::StudyView;
use crate::views::study::{FocusPanel, StudyTestHandles};
use crate::vm::FocusVm;

/// Receivers for every timer the app handed out, in creation order.
pub type IssuedTimers = Arc<Mutex<Vec<watch::Receiver<RunSnapshot>>>>;

struct TestApp {
    clock: Clock,
    theme: Arc<ThemeService>,
    issued: IssuedTimers,
    start_with: Option<SessionPlan>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    fn new_session_timer(&self) -> SessionTimer {
        let timer = SessionTimer::with_tick_period(Duration::from_millis(5));
        if let Some(plan) = self.start_with {
            timer.start(plan);
        }
        self.issued
            .lock()
            .expect("issued timers lock")
            .push(timer.subscribe());
        timer
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The full routed app at `/`: layout, sidebar and home screen.
    Shell,
    Study,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    study_handles: StudyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.study_handles.clone());
    match props.view {
        ViewKind::Shell => rsx! { Router::<Route> {} },
        ViewKind::Study => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { StudyView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub theme: Arc<ThemeService>,
    pub issued: IssuedTimers,
    pub study_handles: StudyTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Updates from the most recent timer the study screen asked for.
    pub fn issued_timer(&self) -> watch::Receiver<RunSnapshot> {
        self.issued
            .lock()
            .expect("issued timers lock")
            .last()
            .cloned()
            .expect("study screen created a timer")
    }

    /// Run `f` inside the dom's runtime, e.g. to call a registered callback.
    pub fn in_runtime(&self, f: impl FnOnce()) {
        self.dom.in_runtime(f);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Storage::in_memory().preferences, None).await
}

pub async fn setup_view_harness_with_preferences(
    view: ViewKind,
    preferences: Arc<dyn PreferenceRepository>,
) -> ViewHarness {
    setup_view_harness_with(view, preferences, None).await
}

/// Every timer the study screen asks for is already running `plan`.
pub async fn setup_view_harness_with_running_timer(plan: SessionPlan) -> ViewHarness {
    setup_view_harness_with(ViewKind::Study, Storage::in_memory().preferences, Some(plan)).await
}

async fn setup_view_harness_with(
    view: ViewKind,
    preferences: Arc<dyn PreferenceRepository>,
    start_with: Option<SessionPlan>,
) -> ViewHarness {
    let theme = Arc::new(ThemeService::new(preferences));
    theme.init().await;

    let issued = IssuedTimers::default();
    let study_handles = StudyTestHandles::default();
    let app = Arc::new(TestApp {
        clock: Clock::fixed(fixed_now()),
        theme: Arc::clone(&theme),
        issued: Arc::clone(&issued),
        start_with,
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            study_handles: study_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        theme,
        issued,
        study_handles,
    }
}

#[derive(Props, Clone, PartialEq)]
struct FocusHarnessProps {
    focus: FocusVm,
}

#[component]
fn FocusHarness(props: FocusHarnessProps) -> Element {
    rsx! {
        FocusPanel { focus: props.focus.clone(), on_end: move |()| {} }
    }
}

/// Render focus mode for a prepared view-model.
pub fn render_focus(focus: FocusVm) -> String {
    let mut dom = VirtualDom::new_with_props(FocusHarness, FocusHarnessProps { focus });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
