//! Department Card Components
//!
//! Cards tilt towards the pointer, ripple on click, drift into a floating
//! loop after a random delay and reveal once scrolled into view. Hovering
//! one card makes its siblings recede. Motion is skipped entirely when the
//! user prefers reduced motion.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_site;
use crate::models::Department;
use crate::motion::{self, PointerInCard, Ripple};
use crate::visibility::{observe_once, VisibilityOptions};

const CARD_VISIBILITY: VisibilityOptions = VisibilityOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

#[component]
pub fn DepartmentCards(departments: Vec<Department>) -> impl IntoView {
    let site = use_site();
    let hovered = RwSignal::new(None::<usize>);
    let still = motion::prefers_reduced_motion();

    view! {
        <section class="departments-section">
            <h2 class="section-title">{move || site.t("departments.title")}</h2>
            <div class="departments-grid">
                {departments
                    .into_iter()
                    .enumerate()
                    .map(|(index, department)| {
                        view! {
                            <div class="department-col">
                                <DepartmentCard department=department index=index hovered=hovered still=still />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Per-card motion signals
#[derive(Clone, Copy)]
struct CardMotion {
    index: usize,
    still: bool,
    hovered: RwSignal<Option<usize>>,
    tilt: RwSignal<Option<String>>,
    icon_shift: RwSignal<Option<String>>,
    ripples: RwSignal<Vec<(u32, Ripple)>>,
    next_ripple: StoredValue<u32>,
}

#[component]
fn DepartmentCard(
    department: Department,
    index: usize,
    hovered: RwSignal<Option<usize>>,
    still: bool,
) -> impl IntoView {
    let site = use_site();
    let card = CardMotion {
        index,
        still,
        hovered,
        tilt: RwSignal::new(None),
        icon_shift: RwSignal::new(None),
        ripples: RwSignal::new(Vec::new()),
        next_ripple: StoredValue::new(0),
    };
    let floating = RwSignal::new(false);
    let revealed = RwSignal::new(false);
    let card_ref = NodeRef::<leptos::html::Div>::new();

    if !still {
        let delay = (js_sys::Math::random() * motion::FLOAT_MAX_DELAY_MS) as u32;
        Timeout::new(delay, move || {
            let _ = floating.try_set(true);
        })
        .forget();
    }

    Effect::new(move |_| {
        if let Some(el) = card_ref.get() {
            observe_once(&el, CARD_VISIBILITY, move || {
                let _ = revealed.try_set(true);
            });
        }
    });

    let label_key = department.label_key;
    let description_key = department.description_key;

    view! {
        <div
            class="department-card-glow"
            class:floating=move || floating.get()
            class:animate-in=move || revealed.get()
            style:transform=move || {
                card.tilt.with(|t| motion::card_transform(index, hovered.get(), t.as_deref()))
            }
            style:opacity=move || if motion::recedes(index, hovered.get()) { "0.7" } else { "1" }
            node_ref=card_ref
            on:mouseenter=make_on_card_mouseenter(card)
            on:mousemove=make_on_card_mousemove(card)
            on:mouseleave=make_on_card_mouseleave(card)
            on:click=make_on_card_click(card)
        >
            <div
                class="department-icon-glow"
                style:transform=move || {
                    card.icon_shift.get().unwrap_or_else(|| motion::ICON_REST_TRANSFORM.to_string())
                }
            >
                <i class=department.icon></i>
            </div>
            <h3 class="card-title">{move || site.t(&label_key)}</h3>
            <p class="card-text">{move || site.t(&description_key)}</p>
            <a class="card-link" href=department.href>
                <i class="fas fa-arrow-right"></i>
            </a>
            <For
                each=move || card.ripples.get()
                key=|(id, _)| *id
                children=move |(_, ripple): (u32, Ripple)| {
                    view! {
                        <span
                            class="ripple-effect"
                            style:width=format!("{}px", ripple.size)
                            style:height=format!("{}px", ripple.size)
                            style:left=format!("{}px", ripple.left)
                            style:top=format!("{}px", ripple.top)
                        ></span>
                    }
                }
            />
        </div>
    }
}

fn make_on_card_mouseenter(card: CardMotion) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        card.hovered.set(Some(card.index));
    }
}

fn make_on_card_mousemove(card: CardMotion) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if card.still {
            return;
        }
        if let Some(pointer) = pointer_in_card(&ev) {
            card.tilt.set(Some(motion::tilt_transform(pointer)));
            card.icon_shift.set(Some(motion::parallax_transform(pointer)));
        }
    }
}

fn make_on_card_mouseleave(card: CardMotion) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        card.hovered.set(None);
        card.tilt.set(None);
        card.icon_shift.set(None);
    }
}

fn make_on_card_click(card: CardMotion) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if card.still {
            return;
        }
        let Some(pointer) = pointer_in_card(&ev) else {
            return;
        };
        let id = card.next_ripple.get_value();
        card.next_ripple.set_value(id.wrapping_add(1));
        card.ripples.update(|r| r.push((id, motion::ripple_at(pointer))));

        let ripples = card.ripples;
        Timeout::new(motion::RIPPLE_LIFETIME_MS, move || {
            ripples.try_update(|r| r.retain(|(rid, _)| *rid != id));
        })
        .forget();
    }
}

fn pointer_in_card(ev: &web_sys::MouseEvent) -> Option<PointerInCard> {
    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = el.get_bounding_client_rect();
    Some(PointerInCard {
        x: f64::from(ev.client_x()) - rect.left(),
        y: f64::from(ev.client_y()) - rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}
