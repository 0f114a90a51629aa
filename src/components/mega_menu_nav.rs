//! Mega Menu Navigation Component
//!
//! Desktop navigation bar with one multi-column dropdown per top-level
//! entry. Open/close logic lives in `leptos_megamenu`; this file only renders
//! and wires handlers. Column headings double as an exclusive accordion on
//! touch viewports.

use leptos::prelude::*;
use leptos_megamenu::{
    bind_global_listeners, create_menu_signals, dropdown_id, make_focus_marker, make_on_region_mouseenter,
    make_on_region_mouseleave, make_on_trigger_click, make_on_trigger_mouseenter, panel_id, trigger_id,
    MegaMenuSignals,
};

use crate::accordion::{aria_expanded, AccordionGroup};
use crate::context::use_site;
use crate::models::{MenuColumn, NavMenu};

#[component]
pub fn MegaMenuNav(menus: Vec<NavMenu>) -> impl IntoView {
    let site = use_site();
    let menu = create_menu_signals(site.with_config(|c| c.menu_timing()));
    bind_global_listeners(menu);

    view! {
        <ul class="navbar-nav mega-nav">
            {menus
                .into_iter()
                .enumerate()
                .map(|(index, nav)| view! { <MegaDropdown menu=menu index=index nav=nav /> })
                .collect_view()}
        </ul>
    }
}

/// One top-level entry: trigger link plus its panel
#[component]
fn MegaDropdown(menu: MegaMenuSignals, index: usize, nav: NavMenu) -> impl IntoView {
    let site = use_site();
    let headers = RwSignal::new(AccordionGroup::exclusive());

    // Crossing the breakpoint starts the accordion from scratch
    Effect::new(move |_| {
        let _ = menu.viewport_read.get();
        headers.update(|h| h.collapse_all());
    });

    let label_key = nav.label_key;
    let open = move || menu.is_open(index);
    let (trigger_focused, on_trigger_focus, on_trigger_blur) = make_focus_marker();

    view! {
        <li
            id=dropdown_id(index)
            class="nav-item mega-dropdown"
            data-menu=nav.id.clone()
            class:show=open
            on:mouseenter=make_on_region_mouseenter(menu)
            on:mouseleave=make_on_region_mouseleave(menu)
        >
            <a
                id=trigger_id(index)
                href="#"
                class="nav-link dropdown-toggle"
                class:focused=move || trigger_focused.get()
                role="button"
                aria-haspopup="true"
                aria-expanded=move || aria_expanded(open())
                aria-controls=panel_id(index)
                on:mouseenter=make_on_trigger_mouseenter(menu, index)
                on:click=make_on_trigger_click(menu, index)
                on:focus=on_trigger_focus
                on:blur=on_trigger_blur
            >
                {move || site.t(&label_key)}
            </a>
            <div id=panel_id(index) class="mega-menu" class:show=open role="menu">
                <div class="mega-menu-columns">
                    {nav.columns
                        .into_iter()
                        .enumerate()
                        .map(|(col, column)| {
                            let list_id = format!("mega-list-{}-{}", index, col);
                            view! { <MegaColumn column=column list_id=list_id headers=headers /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </li>
    }
}

#[component]
fn MegaColumn(column: MenuColumn, list_id: String, headers: RwSignal<AccordionGroup>) -> impl IntoView {
    let site = use_site();
    let heading_key = column.heading_key;

    let id = list_id.clone();
    let expanded = move || headers.with(|h| h.is_open(&id));

    let id = list_id.clone();
    let on_header_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        headers.update(|h| {
            h.toggle(&id);
        });
    };

    view! {
        <div class="mega-menu-column">
            <button
                type="button"
                class="mega-menu-header"
                class:active=expanded.clone()
                aria-expanded={
                    let expanded = expanded.clone();
                    move || aria_expanded(expanded())
                }
                aria-controls=list_id.clone()
                on:click=on_header_click
            >
                {move || site.t(&heading_key)}
            </button>
            <ul id=list_id class="mega-menu-list" class:show=expanded>
                {column.links
                    .into_iter()
                    .map(|link| {
                        let label_key = link.label_key;
                        let (focused, on_focus, on_blur) = make_focus_marker();
                        view! {
                            <li>
                                <a
                                    class="dropdown-item"
                                    class:focused=move || focused.get()
                                    role="menuitem"
                                    href=link.href
                                    on:focus=on_focus
                                    on:blur=on_blur
                                >
                                    {move || site.t(&label_key)}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
