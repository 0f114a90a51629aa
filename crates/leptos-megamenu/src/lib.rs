//! Leptos Mega Menu
//!
//! Hover/click/keyboard controller for multi-column dropdown navigation.
//! At most one dropdown is open at a time; pointer-leave closes it after a
//! short grace period so the cursor can cross gaps between trigger and panel.
//!
//! The transition logic lives in [`state`] and [`focus`] and has no DOM
//! dependency. This module wires it to Leptos signals and browser events.

pub mod focus;
pub mod state;

use std::sync::Once;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use focus::Direction;
pub use state::{MenuEffect, MenuEvent, MenuState, Viewport, HOVER_CLOSE_DELAY_MS, MOBILE_BREAKPOINT_PX};

/// Elements reachable with Tab inside an open dropdown
pub const FOCUSABLE_SELECTOR: &str = r#"a[href], button:not([disabled]), [tabindex]:not([tabindex="-1"])"#;

/// Elements reachable with the arrow keys inside a panel
pub const ARROW_ITEM_SELECTOR: &str = ".dropdown-item, .mega-menu-header";

/// Body class present while any dropdown is open
const BODY_OPEN_CLASS: &str = "mega-menu-open";

/// Delay before keyboard users land on the first item of a fresh panel
const FOCUS_FIRST_ITEM_DELAY_MS: u32 = 100;

pub fn dropdown_id(index: usize) -> String {
    format!("mega-dropdown-{}", index)
}

pub fn trigger_id(index: usize) -> String {
    format!("mega-trigger-{}", index)
}

pub fn panel_id(index: usize) -> String {
    format!("mega-menu-{}", index)
}

/// Timing knobs, normally taken from site configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuTiming {
    pub breakpoint: f64,
    pub hover_close_delay_ms: u32,
    pub focus_first_item_delay_ms: u32,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT_PX,
            hover_close_delay_ms: HOVER_CLOSE_DELAY_MS,
            focus_first_item_delay_ms: FOCUS_FIRST_ITEM_DELAY_MS,
        }
    }
}

/// Menu state signals
#[derive(Clone, Copy)]
pub struct MegaMenuSignals {
    state: StoredValue<MenuState>,
    pub active_read: ReadSignal<Option<usize>>,
    active_write: WriteSignal<Option<usize>>,
    pub viewport_read: ReadSignal<Viewport>,
    viewport_write: WriteSignal<Viewport>,
    focus_delay_ms: u32,
}

pub fn create_menu_signals(timing: MenuTiming) -> MegaMenuSignals {
    let menu_state = MenuState::with_timing(window_width(), timing.breakpoint, timing.hover_close_delay_ms);
    let (active_read, active_write) = signal(None::<usize>);
    let (viewport_read, viewport_write) = signal(menu_state.viewport());
    MegaMenuSignals {
        state: StoredValue::new(menu_state),
        active_read,
        active_write,
        viewport_read,
        viewport_write,
        focus_delay_ms: timing.focus_first_item_delay_ms,
    }
}

impl MegaMenuSignals {
    /// Feed one event through the state machine and apply its effects
    pub fn dispatch(&self, event: MenuEvent) {
        let effects = self
            .state
            .try_update_value(|state| state.handle(event))
            .unwrap_or_default();
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Reactive: whether dropdown `index` is the open one
    pub fn is_open(&self, index: usize) -> bool {
        self.active_read.get() == Some(index)
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_read.get() == Viewport::Mobile
    }

    /// Close whatever is open (public control for other widgets)
    pub fn close_all(&self) {
        self.dispatch(MenuEvent::OutsideClick);
    }

    fn apply(&self, effect: MenuEffect) {
        match effect {
            MenuEffect::Open(index) => {
                self.active_write.set(Some(index));
                set_body_open(true);
                if let Some(panel) = element_by_id(&panel_id(index)) {
                    stagger_items(&panel);
                }
                focus_first_item_later(index, self.focus_delay_ms);
            }
            MenuEffect::Close(_) => {
                self.active_write.set(None);
                set_body_open(false);
            }
            MenuEffect::StartCloseTimer { token, delay_ms } => {
                let menu = *self;
                Timeout::new(delay_ms, move || {
                    menu.dispatch(MenuEvent::CloseTimerFired(token));
                })
                .forget();
            }
            MenuEffect::CancelCloseTimer => {
                // The state machine already dropped the token; the timer fires into a no-op
            }
            MenuEffect::FocusTrigger(index) => {
                if let Some(trigger) = html_element_by_id(&trigger_id(index)) {
                    let _ = trigger.focus();
                }
            }
            MenuEffect::ViewportChanged(viewport) => {
                log::debug!("[MENU] viewport changed to {:?}", viewport);
                self.viewport_write.set(viewport);
            }
        }
    }
}

/// Create mouseenter handler for a trigger link
pub fn make_on_trigger_mouseenter(menu: MegaMenuSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        menu.dispatch(MenuEvent::TriggerEnter(index));
    }
}

/// Create click handler for a trigger link
pub fn make_on_trigger_click(menu: MegaMenuSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        menu.dispatch(MenuEvent::TriggerClick(index));
    }
}

/// Create mouseenter handler for a whole dropdown region
pub fn make_on_region_mouseenter(menu: MegaMenuSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        menu.dispatch(MenuEvent::RegionEnter);
    }
}

/// Create mouseleave handler for a whole dropdown region
pub fn make_on_region_mouseleave(menu: MegaMenuSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        menu.dispatch(MenuEvent::RegionLeave);
    }
}

/// Focus tracking for the `focused` class on nav links and dropdown items.
/// Returns the flag plus focus and blur handlers.
pub fn make_focus_marker() -> (
    ReadSignal<bool>,
    impl Fn(web_sys::FocusEvent) + Copy + 'static,
    impl Fn(web_sys::FocusEvent) + Copy + 'static,
) {
    let (focused, set_focused) = signal(false);
    let on_focus = move |_ev: web_sys::FocusEvent| set_focused.set(true);
    let on_blur = move |_ev: web_sys::FocusEvent| set_focused.set(false);
    (focused, on_focus, on_blur)
}

static GLOBAL_LISTENERS: Once = Once::new();

/// Bind document click/keydown and window resize handlers. Only the first
/// call has any effect.
pub fn bind_global_listeners(menu: MegaMenuSignals) {
    GLOBAL_LISTENERS.call_once(|| {
        bind_outside_click(menu);
        bind_keydown(menu);
        bind_resize(menu);
    });
}

fn bind_outside_click(menu: MegaMenuSignals) {
    use wasm_bindgen::closure::Closure;

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".mega-dropdown").ok().flatten())
            .is_some();
        if !inside {
            menu.dispatch(MenuEvent::OutsideClick);
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

fn bind_keydown(menu: MegaMenuSignals) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        match key.as_str() {
            "Escape" => menu.dispatch(MenuEvent::Escape),
            "Tab" => handle_tab(&menu, &ev),
            "Enter" | " " => handle_activate(&ev),
            other => {
                if let Some(direction) = Direction::from_key(other) {
                    handle_arrow(&ev, direction);
                }
            }
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

fn bind_resize(menu: MegaMenuSignals) {
    use wasm_bindgen::closure::Closure;

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        menu.dispatch(MenuEvent::Resize { width: window_width() });
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Keep Tab inside the open dropdown
fn handle_tab(menu: &MegaMenuSignals, ev: &web_sys::KeyboardEvent) {
    let Some(index) = menu.active_read.get_untracked() else {
        return;
    };
    let Some(dropdown) = element_by_id(&dropdown_id(index)) else {
        return;
    };
    let focusables = query_all(&dropdown, FOCUSABLE_SELECTOR);
    let current = active_element().and_then(|el| position_of(&focusables, &el));
    if let Some(target) = focus::trap_tab(current, focusables.len(), ev.shift_key()) {
        ev.prevent_default();
        let _ = focusables[target].focus();
    }
}

/// Move focus between items of the panel that currently holds focus
fn handle_arrow(ev: &web_sys::KeyboardEvent, direction: Direction) {
    let Some(focused) = active_element() else {
        return;
    };
    let Some(panel) = focused.closest(".mega-menu").ok().flatten() else {
        return;
    };
    let items = query_all(&panel, ARROW_ITEM_SELECTOR);
    let Some(current) = position_of(&items, &focused) else {
        return;
    };
    ev.prevent_default();
    if let Some(next) = focus::step(current, items.len(), direction) {
        let _ = items[next].focus();
    }
}

/// Enter/Space on a toggle or accordion header acts as a click
fn handle_activate(ev: &web_sys::KeyboardEvent) {
    let Some(focused) = active_element() else {
        return;
    };
    let classes = focused.class_list();
    if classes.contains("mega-menu-header") || classes.contains("dropdown-toggle") {
        ev.prevent_default();
        focused.click();
    }
}

fn focus_first_item_later(index: usize, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let trigger_focused = active_element()
            .map(|el| el.id() == trigger_id(index))
            .unwrap_or(false);
        if !trigger_focused {
            return;
        }
        let first = element_by_id(&panel_id(index))
            .and_then(|panel| query_all(&panel, ".dropdown-item").into_iter().next());
        if let Some(item) = first {
            let _ = item.focus();
        }
    })
    .forget();
}

/// Staggered entrance animation: item k starts 0.1s + 0.05s * k after open
fn stagger_items(panel: &web_sys::Element) {
    for (k, item) in query_all(panel, ".dropdown-item").iter().enumerate() {
        let delay = format!("{:.2}s", 0.1 + 0.05 * k as f64);
        let _ = item.style().set_property("animation-delay", &delay);
    }
}

fn set_body_open(open: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(BODY_OPEN_CLASS, open);
    }
}

// ========================
// DOM helpers
// ========================

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX)
}

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

fn active_element() -> Option<web_sys::HtmlElement> {
    document()
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

fn position_of(items: &[web_sys::HtmlElement], target: &web_sys::HtmlElement) -> Option<usize> {
    let target: &web_sys::Node = target;
    items.iter().position(|item| item.is_same_node(Some(target)))
}
