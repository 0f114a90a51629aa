//! Chatbot Widget
//!
//! Floating toggle button plus the chat window. Transcript and send guard
//! live in [`ChatSession`]; replies come from a [`ResponseResolver`] after a
//! short simulated delay.

use std::sync::{Arc, Once};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::chatbot::{submits_on_key, ChatSession, KeywordResolver, ResponseResolver};
use crate::content;
use crate::context::use_site;
use crate::models::ChatMessage;

const SCROLL_DELAY_MS: u32 = 100;

static OUTSIDE_CLICK: Once = Once::new();

pub type SharedResolver = Arc<dyn ResponseResolver + Send + Sync>;

#[component]
pub fn ChatbotWidget(#[prop(optional)] resolver: Option<SharedResolver>) -> impl IntoView {
    let site = use_site();
    let resolver = StoredValue::new(resolver.unwrap_or_else(|| Arc::new(KeywordResolver::default())));
    let config = site.config();
    let (focus_delay, indicator_delay, reply_delay) =
        (config.chat_focus_delay_ms, config.typing_indicator_delay_ms, config.reply_delay_ms);

    let session = RwSignal::new(ChatSession::new());
    let window_ref = NodeRef::<leptos::html::Div>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let welcome = resolver.with_value(|r| r.welcome(site.language_untracked()));
    session.update(|s| s.welcome(&welcome));

    let scroll_to_bottom = move || {
        Timeout::new(SCROLL_DELAY_MS, move || {
            if let Some(el) = messages_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        })
        .forget();
    };

    let toggle = move || {
        let opened = session.try_update(|s| s.toggle()).unwrap_or(false);
        if opened {
            Timeout::new(focus_delay, move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            })
            .forget();
        }
    };

    let send = move |raw: String| {
        let Some(text) = session.try_update(|s| s.begin_send(&raw)).flatten() else {
            return;
        };
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
        scroll_to_bottom();

        Timeout::new(indicator_delay, move || {
            session.try_update(|s| s.show_indicator());
            scroll_to_bottom();
        })
        .forget();

        Timeout::new(reply_delay, move || {
            let language = site.language_untracked();
            let reply = resolver.with_value(|r| r.resolve(&text, language));
            log::debug!("[CHAT] topic {:?}", reply.topic);
            session.try_update(|s| s.finish_reply(&reply));
            scroll_to_bottom();
        })
        .forget();
    };

    let send_from_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            send(input.value());
        }
    };

    OUTSIDE_CLICK.call_once(|| bind_outside_click(session, window_ref, toggle_ref));

    view! {
        <div class="chatbot-container">
            <button
                type="button"
                id="chatbotToggle"
                class="chatbot-toggle"
                class:active=move || session.with(|s| s.is_open())
                aria-label=move || site.t("chatbot.open")
                node_ref=toggle_ref
                on:click=move |_| toggle()
            >
                <i class="fas fa-comments"></i>
            </button>

            <div
                id="chatbotWindow"
                class="chatbot-window"
                class:open=move || session.with(|s| s.is_open())
                dir=move || site.language().dir()
                node_ref=window_ref
            >
                <div class="chatbot-header">
                    <div class="chatbot-info">
                        <h4>{move || site.t("chatbot.title")}</h4>
                        <span class="chatbot-status">{move || site.t("chatbot.status")}</span>
                    </div>
                    <button
                        type="button"
                        id="chatbotClose"
                        class="chatbot-close"
                        aria-label=move || site.t("chatbot.close")
                        on:click=move |_| toggle()
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div id="chatbotMessages" class="chatbot-messages" node_ref=messages_ref>
                    <For
                        each=move || session.with(|s| s.messages().to_vec())
                        key=|msg| msg.id
                        children=move |msg: ChatMessage| view! { <MessageBubble msg=msg /> }
                    />
                    <Show when=move || session.with(|s| s.shows_indicator())>
                        <div class="message bot-message typing-indicator" aria-label=move || site.t("chatbot.typing")>
                            <span class="typing-dot"></span>
                            <span class="typing-dot"></span>
                            <span class="typing-dot"></span>
                        </div>
                    </Show>
                </div>

                <div class="chatbot-quick-actions">
                    {content::quick_actions()
                        .into_iter()
                        .map(|action| {
                            let label_key = action.label_key;
                            let message = action.message;
                            let data_message = message.clone();
                            view! {
                                <button
                                    type="button"
                                    class="quick-action"
                                    data-message=data_message
                                    on:click=move |_| send(message.clone())
                                >
                                    {move || site.t(&label_key)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="chatbot-input">
                    <input
                        type="text"
                        id="chatbotInput"
                        autocomplete="off"
                        placeholder=move || site.t("chatbot.placeholder")
                        node_ref=input_ref
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if submits_on_key(&ev.key(), ev.is_composing()) {
                                ev.prevent_default();
                                send_from_input();
                            }
                        }
                    />
                    <button
                        type="button"
                        id="chatbotSend"
                        aria-label=move || site.t("chatbot.send")
                        on:click=move |_| send_from_input()
                    >
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    view! {
        <div class=msg.sender.css_class()>
            <span class="message-avatar">{msg.sender.avatar()}</span>
            <div class="message-content">{msg.text}</div>
        </div>
    }
}

/// Close the window on clicks outside both the window and its toggle
fn bind_outside_click(
    session: RwSignal<ChatSession>,
    window_ref: NodeRef<leptos::html::Div>,
    toggle_ref: NodeRef<leptos::html::Button>,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[CHAT] no document; outside-click close disabled");
        return;
    };

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !session.try_with_untracked(|s| s.is_open()).unwrap_or(false) {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside = |el: Option<web_sys::Element>| el.map(|el| el.contains(Some(&target))).unwrap_or(false);
        let in_window = inside(window_ref.get_untracked().map(|el| el.unchecked_into()));
        let in_toggle = inside(toggle_ref.get_untracked().map(|el| el.unchecked_into()));
        if !in_window && !in_toggle {
            session.try_update(|s| s.close());
        }
    });

    if document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[CHAT] failed to bind outside-click listener");
    }
    on_click.forget();
}
