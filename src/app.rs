//! Hospital Site App
//!
//! Page bootstrap and the root component: header navigation, hero, stats and
//! the chat widget.

use std::sync::Once;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    BrandText, ChatbotWidget, DepartmentCards, LanguageToggle, MegaMenuNav, MobileNav, StatsSection,
    ThemeToggle,
};
use crate::config::SiteConfig;
use crate::content;
use crate::context::SiteContext;
use crate::i18n::{self, Language};
use crate::motion;
use crate::storage::LocalPreferences;
use crate::store::{self, SiteState, SiteStateStoreFields};
use crate::text_style;
use crate::theme::{self, Theme};

static INIT: Once = Once::new();

/// Set up logging, restore preferences and mount the page. Safe to call
/// more than once; only the first call does anything.
pub fn initialize() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let config = SiteConfig::from_document();
        if console_logger::init(console_logger::parse_level(&config.log_level)).is_err() {
            web_sys::console::warn_1(&"[APP] logger already installed".into());
        }

        let theme = theme::load(&LocalPreferences, &config.theme_storage_key);
        theme::apply(theme);
        let language = i18n::load_language(&LocalPreferences, &config.language_storage_key);
        i18n::apply_direction(language);
        if motion::apply_reduced_motion() {
            log::info!("[APP] reduced motion requested, transitions disabled");
        }
        log::info!("[APP] starting: theme={} language={}", theme.as_str(), language.code());

        mount_to_body(move || view! { <App config=config theme=theme language=language /> });
    });
}

#[component]
pub fn App(config: SiteConfig, theme: Theme, language: Language) -> impl IntoView {
    let en_url = config.locale_url(Language::En.code());
    let ar_url = config.locale_url(Language::Ar.code());
    let needle = config.highlight_needle.clone();

    let store = Store::new(SiteState::new(theme, language));
    let site = SiteContext::new(store, config);
    provide_context(site);

    // Load both locale tables once
    spawn_local(async move {
        let translations = i18n::load_translations(&en_url, &ar_url).await;
        let current = site.language_untracked();
        if !translations.has(current) {
            log::warn!("[I18N] no table for {}, falling back to English", current.code());
            if current != Language::En {
                site.set_language(Language::En);
            }
        }
        let active = site.language_untracked();
        i18n::apply_to_document(&translations, active);
        store::store_set_translations(&store, translations);
        log::info!("[I18N] translations loaded");
    });

    // Restyle static brand mentions whenever translated markup changes
    Effect::new(move |_| {
        let _ = store.language().get();
        if store.translations_loaded().get() {
            let count = text_style::style_document(&needle);
            log::debug!("[STYLE] highlighted {} mentions", count);
        }
    });

    let menus = content::navigation();
    let hero_title = Signal::derive(move || site.t("hero.title"));

    view! {
        <header class="site-header">
            <nav class="navbar">
                <a class="navbar-brand" href="index.html">
                    <BrandText text=hero_title />
                </a>
                <MegaMenuNav menus=menus.clone() />
                <div class="navbar-controls">
                    <LanguageToggle />
                    <ThemeToggle />
                </div>
            </nav>
            <MobileNav menus=menus />
        </header>

        <main>
            <section class="hero">
                <h1 class="hero-title"><BrandText text=hero_title /></h1>
                <p class="hero-subtitle">{move || site.t("hero.subtitle")}</p>
            </section>
            <StatsSection stats=content::stats() />
            <DepartmentCards departments=content::departments() />
        </main>

        // Static markup, translated via data-i18n and restyled in place
        <footer class="site-footer" data-brand-scope="">
            <p data-i18n="footer.tagline">"Adam International Hospital cares for families."</p>
            <p data-i18n="footer.rights">"All rights reserved."</p>
        </footer>

        <ChatbotWidget />
    }
}
