//! Theme Toggle Component
//!
//! Checkbox switch between light and dark themes.

use leptos::prelude::*;

use crate::context::use_site;
use crate::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let site = use_site();
    let is_dark = move || site.theme() == Theme::Dark;

    view! {
        <label class="theme-switch" title=move || site.t("theme.toggle")>
            <input
                type="checkbox"
                id="themeToggle"
                aria-label=move || site.t("theme.toggle")
                prop:checked=is_dark
                on:change=move |ev| {
                    let next = if event_target_checked(&ev) { Theme::Dark } else { Theme::Light };
                    site.set_theme(next);
                }
            />
            <span class="theme-icon">
                <i class=move || site.theme().icon_class()></i>
            </span>
        </label>
    }
}
