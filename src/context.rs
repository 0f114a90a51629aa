//! Site Context
//!
//! Shared handle provided via Leptos Context API: the state store, the
//! configuration and the persistence side effects that go with changing
//! theme or language.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::i18n::{self, Language};
use crate::storage::LocalPreferences;
use crate::store::{self, SiteStore, SiteStateStoreFields};
use crate::theme::{self, Theme};

#[derive(Clone, Copy)]
pub struct SiteContext {
    pub store: SiteStore,
    config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn new(store: SiteStore, config: SiteConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Reactive translation
    pub fn t(&self, key: &str) -> String {
        store::store_translate(&self.store, key)
    }

    pub fn language(&self) -> Language {
        self.store.language().get()
    }

    pub fn language_untracked(&self) -> Language {
        self.store.language().get_untracked()
    }

    pub fn theme(&self) -> Theme {
        self.store.theme().get()
    }

    /// Apply, persist and publish a theme
    pub fn set_theme(&self, next: Theme) {
        let key = self.with_config(|c| c.theme_storage_key.clone());
        theme::save(&LocalPreferences, &key, next);
        theme::apply(next);
        store::store_set_theme(&self.store, next);
        log::debug!("[THEME] {}", next.as_str());
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.store.theme().get_untracked().toggled());
    }

    /// Switch language: persist, flip document direction, rewrite static
    /// `data-i18n` markup and publish to reactive views
    pub fn set_language(&self, next: Language) {
        let key = self.with_config(|c| c.language_storage_key.clone());
        i18n::save_language(&LocalPreferences, &key, next);
        i18n::apply_direction(next);
        store::store_set_language(&self.store, next);
        self.store
            .translations()
            .with_untracked(|t| i18n::apply_to_document(t, next));
        log::debug!("[I18N] language {}", next.code());
    }

    pub fn toggle_language(&self) {
        self.set_language(self.store.language().get_untracked().other());
    }
}

/// Get the site context
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
