//! Mobile Accordion Navigation
//!
//! Collapsible panels for small screens. Each toggle names its panel through
//! `data-target`; panels expand independently.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::accordion::{aria_expanded, AccordionGroup};
use crate::context::use_site;
use crate::models::NavMenu;

#[component]
pub fn MobileNav(menus: Vec<NavMenu>) -> impl IntoView {
    let site = use_site();
    let panels = RwSignal::new(AccordionGroup::independent());

    // Panel id comes from the clicked toggle's data-target
    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let target = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-target"));
        match target {
            Some(id) => panels.update(|p| {
                p.toggle(&id);
            }),
            None => log::debug!("[ACCORDION] toggle without data-target"),
        }
    };

    view! {
        <nav class="mobile-accordion-nav" aria-label=move || site.t("nav.menu")>
            {menus
                .into_iter()
                .map(|nav| {
                    let panel_id = format!("mobile-panel-{}", nav.id);
                    let id = panel_id.clone();
                    let open = move || panels.with(|p| p.is_open(&id));
                    let label_key = nav.label_key;
                    view! {
                        <div class="accordion-item">
                            <button
                                type="button"
                                class="accordion-toggle"
                                data-target=panel_id.clone()
                                aria-controls=panel_id.clone()
                                aria-expanded={
                                    let open = open.clone();
                                    move || aria_expanded(open())
                                }
                                on:click=on_toggle
                            >
                                {move || site.t(&label_key)}
                            </button>
                            <div id=panel_id class="accordion-panel" class:show=open>
                                {nav.columns
                                    .into_iter()
                                    .flat_map(|column| column.links)
                                    .map(|link| {
                                        let label_key = link.label_key;
                                        view! {
                                            <a class="accordion-link" href=link.href>
                                                {move || site.t(&label_key)}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="accordion-theme-toggle">
                <button
                    type="button"
                    aria-label=move || site.t("theme.toggle")
                    on:click=move |_| site.toggle_theme()
                >
                    <span class="theme-icon">{move || site.theme().icon_emoji()}</span>
                </button>
            </div>
        </nav>
    }
}
