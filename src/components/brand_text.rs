//! Brand Text Component
//!
//! Renders text with every brand mention wrapped in a highlight span.

use leptos::either::Either;
use leptos::prelude::*;

use crate::context::use_site;
use crate::text_style::{segments, HIGHLIGHT_CLASS};

#[component]
pub fn BrandText(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let site = use_site();
    let needle = site.with_config(|c| c.highlight_needle.clone());

    move || {
        segments(&text.get(), &needle)
            .into_iter()
            .map(|segment| {
                if segment.highlighted {
                    Either::Left(view! { <span class=HIGHLIGHT_CLASS>{segment.text}</span> })
                } else {
                    Either::Right(segment.text)
                }
            })
            .collect_view()
    }
}
