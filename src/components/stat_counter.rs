//! Statistic Counter Components
//!
//! Each number counts up from zero the first time it scrolls into view.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_site;
use crate::counter::{format_count, parse_target, CounterAnimation};
use crate::models::Stat;
use crate::visibility::{observe_once, VisibilityOptions};

/// Counters start once half of the number is on screen
const COUNTER_VISIBILITY: VisibilityOptions = VisibilityOptions {
    threshold: 0.5,
    root_margin: "0px 0px -50px 0px",
};

#[component]
pub fn StatsSection(stats: Vec<Stat>) -> impl IntoView {
    let site = use_site();

    view! {
        <section class="stats-section">
            <h2 class="stats-title">{move || site.t("stats.title")}</h2>
            <div class="stats-grid">
                {stats.into_iter().map(|stat| view! { <StatCounter stat=stat /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn StatCounter(stat: Stat) -> impl IntoView {
    let site = use_site();
    let target = parse_target(Some(&stat.target));
    let (duration_ms, frame_ms) = site.with_config(|c| (c.counter_duration_ms, c.counter_frame_ms));

    let (display, set_display) = signal(format_count(0.0, target));
    let (counted, set_counted) = signal(false);
    let node_ref = NodeRef::<leptos::html::Span>::new();

    let start = move || {
        if counted.get_untracked() {
            return;
        }
        set_counted.set(true);
        run_frames(CounterAnimation::new(target, duration_ms, frame_ms), frame_ms, set_display);
    };

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            observe_once(&el, COUNTER_VISIBILITY, start);
        }
    });

    let label_key = stat.label_key;

    view! {
        <div class="stat-item">
            <span
                class="stat-number"
                class:counted=move || counted.get()
                data-target=stat.target
                node_ref=node_ref
            >
                {move || display.get()}
            </span>
            <span class="stat-suffix">{stat.suffix}</span>
            <p class="stat-label">{move || site.t(&label_key)}</p>
        </div>
    }
}

/// Advance one frame per timeout until the target is reached
fn run_frames(mut anim: CounterAnimation, frame_ms: u32, set_display: WriteSignal<String>) {
    if anim.is_done() {
        set_display.set(format_count(anim.target(), anim.target()));
        return;
    }
    Timeout::new(frame_ms, move || {
        set_display.set(anim.tick());
        run_frames(anim, frame_ms, set_display);
    })
    .forget();
}
