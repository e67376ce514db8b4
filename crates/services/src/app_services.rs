use std::sync::Arc;
use std::time::Duration;

use storage::repository::Storage;

use crate::session_timer::{DEFAULT_TICK_PERIOD, SessionTimer};
use crate::theme_service::ThemeService;

/// Assembles app-facing services from a storage backend.
#[derive(Clone)]
pub struct AppServices {
    theme: Arc<ThemeService>,
    tick_period: Duration,
}

impl AppServices {
    /// Build services and load persisted state.
    ///
    /// Theme loading never fails; storage problems fall back to defaults.
    pub async fn from_storage(storage: &Storage) -> Self {
        let theme = Arc::new(ThemeService::new(Arc::clone(&storage.preferences)));
        theme.init().await;

        Self {
            theme,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    /// A fresh timer for one study screen. The screen owns it and drops it on teardown.
    #[must_use]
    pub fn new_session_timer(&self) -> SessionTimer {
        SessionTimer::with_tick_period(self.tick_period)
    }
}
