use std::sync::Arc;

use storage::repository::PreferenceRepository;
use study_core::model::{ColorScheme, THEME_PREFERENCE_KEY, ThemePreference};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::ThemeServiceError;

/// Application-wide theme state with an explicit load/persist lifecycle.
///
/// Holds the current preference in memory and notifies subscribers when it
/// changes. Storage failures never surface to the user: reads fall back to
/// `ThemePreference::System`, failed writes keep the previous value.
pub struct ThemeService {
    repo: Arc<dyn PreferenceRepository>,
    current: watch::Sender<ThemePreference>,
}

impl ThemeService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        let (current, _) = watch::channel(ThemePreference::default());
        Self { repo, current }
    }

    /// Load the persisted preference and make it current.
    ///
    /// Returns the effective preference.
    pub async fn init(&self) -> ThemePreference {
        let loaded = match self.repo.get_preference(THEME_PREFERENCE_KEY).await {
            Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|err| {
                warn!(error = %err, "ignoring stored theme preference");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                warn!(error = %err, "failed to load theme preference");
                ThemePreference::default()
            }
        };

        self.replace(loaded);
        info!(theme = %loaded, "theme preference loaded");
        loaded
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        *self.current.borrow()
    }

    #[must_use]
    pub fn is_dark(&self, system: ColorScheme) -> bool {
        self.preference().is_dark(system)
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.current.subscribe()
    }

    /// Persist `preference`, then make it current.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError::Storage` if the write fails; the current
    /// preference is left unchanged in that case.
    pub async fn set_preference(
        &self,
        preference: ThemePreference,
    ) -> Result<(), ThemeServiceError> {
        if let Err(err) = self
            .repo
            .set_preference(THEME_PREFERENCE_KEY, preference.as_str())
            .await
        {
            warn!(error = %err, theme = %preference, "failed to save theme preference");
            return Err(err.into());
        }

        self.replace(preference);
        Ok(())
    }

    fn replace(&self, preference: ThemePreference) {
        self.current.send_if_modified(|current| {
            if *current == preference {
                return false;
            }
            *current = preference;
            true
        });
    }
}
