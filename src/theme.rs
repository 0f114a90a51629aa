//! Theme
//!
//! Light/dark preference persisted in local storage and mirrored onto the
//! `data-theme` attribute of both `<body>` and `<html>`.

use serde::{Deserialize, Serialize};

use crate::storage::{read_or_none, write_or_log, PreferenceStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome class for the toggle icon (shows the theme you'd switch to)
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    /// Emoji used by the accordion (mobile) theme toggle
    pub fn icon_emoji(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

/// Persisted theme, or light when nothing usable is stored
pub fn load(store: &impl PreferenceStore, key: &str) -> Theme {
    read_or_none(store, key)
        .map(|v| Theme::parse(&v))
        .unwrap_or_default()
}

pub fn save(store: &impl PreferenceStore, key: &str, theme: Theme) {
    write_or_log(store, key, theme.as_str());
}

/// Flip the current theme, persist it and return the new value
pub fn toggle(store: &impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    save(store, key, next);
    next
}

/// Write `data-theme` on `<body>` and the document root
pub fn apply(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(body) = doc.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;

    const KEY: &str = "theme";

    #[test]
    fn test_default_is_light() {
        let store = MemoryPreferences::default();
        assert_eq!(load(&store, KEY), Theme::Light);
    }

    #[test]
    fn test_garbage_value_falls_back() {
        let store = MemoryPreferences::default();
        store.set(KEY, "sepia").unwrap();
        assert_eq!(load(&store, KEY), Theme::Light);
    }

    #[test]
    fn test_toggle_survives_reload() {
        let store = MemoryPreferences::default();
        let initial = load(&store, KEY);
        let toggled = toggle(&store, KEY, initial);
        assert_eq!(toggled, Theme::Dark);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));

        // A fresh page load reads the same store
        assert_eq!(load(&store, KEY), Theme::Dark);

        let back = toggle(&store, KEY, load(&store, KEY));
        assert_eq!(back, Theme::Light);
        assert_eq!(load(&store, KEY), Theme::Light);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }
}
