//! Scroll Visibility
//!
//! One-shot "element scrolled into view" callbacks for counters and cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Call `on_visible` the first time `el` becomes visible. Uses
/// IntersectionObserver, or a scroll listener where it is unavailable.
pub fn observe_once(el: &web_sys::Element, options: VisibilityOptions, on_visible: impl Fn() + Copy + 'static) {
    let on_entries = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match web_sys::IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(el);
            on_entries.forget();
        }
        Err(_) => {
            log::debug!("[VISIBILITY] IntersectionObserver unavailable, using scroll fallback");
            observe_by_scroll(el.clone(), on_visible);
        }
    }
}

fn observe_by_scroll(el: web_sys::Element, on_visible: impl Fn() + Copy + 'static) {
    let check = move || {
        let Some(win) = web_sys::window() else { return };
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let rect = el.get_bounding_client_rect();
        if rect.top() < height && rect.bottom() > 0.0 {
            on_visible();
        }
    };
    check();

    let on_scroll = Closure::<dyn FnMut()>::new(check);
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();
}
