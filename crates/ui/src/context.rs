use std::sync::Arc;

use services::{Clock, SessionTimer, ThemeService};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn theme(&self) -> Arc<ThemeService>;

    /// A fresh timer for one study screen. Each mount owns its own timer.
    fn new_session_timer(&self) -> SessionTimer;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    theme: Arc<ThemeService>,
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            theme: app.theme(),
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    #[must_use]
    pub fn new_session_timer(&self) -> SessionTimer {
        self.app.new_session_timer()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
