use study_core::model::ThemePreference;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeOptionVm {
    pub value: ThemePreference,
    pub label: &'static str,
    pub selected: bool,
}

/// Class for the root element; `theme-system` defers to `prefers-color-scheme`.
#[must_use]
pub fn theme_class(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "theme-light",
        ThemePreference::Dark => "theme-dark",
        ThemePreference::System => "theme-system",
    }
}

#[must_use]
pub fn theme_options(current: ThemePreference) -> Vec<ThemeOptionVm> {
    ThemePreference::ALL
        .iter()
        .map(|&value| ThemeOptionVm {
            value,
            label: match value {
                ThemePreference::Light => "Light",
                ThemePreference::Dark => "Dark",
                ThemePreference::System => "System",
            },
            selected: value == current,
        })
        .collect()
}
