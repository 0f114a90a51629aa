//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::i18n::{Language, Translations};
use crate::theme::Theme;

/// Page-wide state shared by every widget
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Current colour theme
    pub theme: Theme,
    /// Current UI language
    pub language: Language,
    /// Both translation tables (empty until fetched)
    pub translations: Translations,
    /// Set once the locale fetch finished, successfully or not
    pub translations_loaded: bool,
}

impl SiteState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_theme(store: &SiteStore, theme: Theme) {
    store.theme().set(theme);
}

pub fn store_set_language(store: &SiteStore, language: Language) {
    store.language().set(language);
}

pub fn store_set_translations(store: &SiteStore, translations: Translations) {
    store.translations().set(translations);
    store.translations_loaded().set(true);
}

/// Reactive translation of `key` in the current language
pub fn store_translate(store: &SiteStore, key: &str) -> String {
    let language = store.language().get();
    store.translations().read().translate(language, key)
}
