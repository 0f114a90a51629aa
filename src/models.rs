//! Frontend Models
//!
//! Navigation content and chat transcript records.

use serde::{Deserialize, Serialize};

/// Top-level navigation entry with a mega-menu panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavMenu {
    /// Stable slug, used in element ids
    pub id: String,
    pub label_key: String,
    pub columns: Vec<MenuColumn>,
}

/// One column of a mega-menu panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuColumn {
    pub heading_key: String,
    pub links: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label_key: String,
    pub href: String,
}

/// Headline statistic animated by a counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label_key: String,
    /// Raw `data-target` value
    pub target: String,
    #[serde(default)]
    pub suffix: String,
}

/// Department highlight card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub label_key: String,
    pub description_key: String,
    /// Font Awesome classes for the card icon
    pub icon: String,
    pub href: String,
}

/// Quick-action chip in the chat panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label_key: String,
    /// Text sent as if typed by the user
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "message user-message",
            Sender::Bot => "message bot-message",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Bot => "🏥",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
}
