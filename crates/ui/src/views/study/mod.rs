mod focus;
mod form;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use study_core::model::{PlanDraft, SessionPlan};

use crate::context::AppContext;
use crate::vm::FocusVm;

pub(crate) use focus::FocusPanel;
use form::PlanForm;

/// Plan form until a run starts, then focus mode until it is ended.
///
/// The timer belongs to this screen; unmounting cancels it.
#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let timer = use_hook(|| Arc::new(ctx.new_session_timer()));
    let run = use_signal(|| timer.snapshot());
    let today = ctx.clock().today();
    let draft = use_signal(|| PlanDraft::defaults_for(today));

    {
        let timer = Arc::clone(&timer);
        use_future(move || {
            let mut updates = timer.subscribe();
            let mut run = run;
            async move {
                while updates.changed().await.is_ok() {
                    let next = updates.borrow_and_update().clone();
                    run.set(next);
                }
            }
        });
    }

    {
        let timer = Arc::clone(&timer);
        use_drop(move || timer.cancel());
    }

    let on_start = {
        let timer = Arc::clone(&timer);
        use_callback(move |plan: SessionPlan| timer.start(plan))
    };
    let on_end = {
        let timer = Arc::clone(&timer);
        use_callback(move |()| timer.cancel())
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(on_start, on_end);
            }
        }
    }

    let focus = FocusVm::from_run(&run.read());

    rsx! {
        div { class: "page study",
            match focus {
                Some(focus) => rsx! {
                    FocusPanel { focus, on_end }
                },
                None => rsx! {
                    PlanForm { draft, on_start }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    start: Rc<RefCell<Option<Callback<SessionPlan>>>>,
    end: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, start: Callback<SessionPlan>, end: Callback<()>) {
        *self.start.borrow_mut() = Some(start);
        *self.end.borrow_mut() = Some(end);
    }

    pub(crate) fn start(&self) -> Callback<SessionPlan> {
        (*self.start.borrow()).expect("study start registered")
    }

    pub(crate) fn end(&self) -> Callback<()> {
        (*self.end.borrow()).expect("study end registered")
    }
}
