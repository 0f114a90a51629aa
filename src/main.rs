//! Hospital Site Frontend Entry Point

mod accordion;
mod app;
mod chatbot;
mod components;
mod config;
mod content;
mod context;
mod counter;
mod error;
mod i18n;
mod models;
mod motion;
mod storage;
mod store;
mod text_style;
mod theme;
mod visibility;

fn main() {
    app::initialize();
}
