//! Language Toggle Component

use leptos::prelude::*;

use crate::context::use_site;

/// Switches between English and Arabic; the label names the other language
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let site = use_site();

    view! {
        <button
            type="button"
            id="languageToggle"
            class="language-toggle"
            aria-label=move || site.t("language.toggle")
            on:click=move |_| site.toggle_language()
        >
            <span class="lang-text">{move || site.language().other().native_name()}</span>
        </button>
    }
}
