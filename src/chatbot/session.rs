//! Chat Session State
//!
//! Open/closed flag, in-flight guard and the append-only transcript.

use super::resolver::Reply;
use crate::models::{ChatMessage, Sender};

/// Enter submits, except while an IME composition is still open
pub fn submits_on_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    open: bool,
    typing: bool,
    indicator: bool,
    welcomed: bool,
    next_id: u32,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// A reply is pending; further sends are ignored until it lands
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn shows_indicator(&self) -> bool {
        self.indicator
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Flip open/closed; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close if open; returns whether anything changed
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Post the greeting once per session
    pub fn welcome(&mut self, text: &str) {
        if !self.welcomed {
            self.welcomed = true;
            self.push(text, Sender::Bot);
        }
    }

    /// Accept user input. Returns the trimmed text when it was appended,
    /// `None` for blank input or while a reply is still pending.
    pub fn begin_send(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() || self.typing {
            return None;
        }
        self.typing = true;
        self.push(text, Sender::User);
        Some(text.to_string())
    }

    pub fn show_indicator(&mut self) {
        if self.typing {
            self.indicator = true;
        }
    }

    /// Hide the indicator, append the reply and accept input again
    pub fn finish_reply(&mut self, reply: &Reply) {
        self.indicator = false;
        self.typing = false;
        for text in &reply.messages {
            self.push(text, Sender::Bot);
        }
    }

    fn push(&mut self, text: &str, sender: Sender) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text: text.to_string(),
            sender,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::resolver::{KeywordResolver, ResponseResolver};
    use crate::i18n::Language;

    #[test]
    fn test_toggle_and_close() {
        let mut session = ChatSession::new();
        assert!(session.toggle());
        assert!(session.close());
        assert!(!session.close());
        assert!(!session.is_open());
    }

    #[test]
    fn test_welcome_only_once() {
        let mut session = ChatSession::new();
        session.welcome("hi");
        session.welcome("hi");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.begin_send("   "), None);
        assert!(session.messages().is_empty());
        assert!(!session.is_typing());
    }

    #[test]
    fn test_send_while_typing_is_suppressed() {
        let mut session = ChatSession::new();
        assert_eq!(session.begin_send("  book please "), Some("book please".to_string()));
        assert_eq!(session.begin_send("again"), None);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_full_exchange() {
        let resolver = KeywordResolver::default();
        let mut session = ChatSession::new();
        let text = session.begin_send("zzz").unwrap();

        session.show_indicator();
        assert!(session.shows_indicator());

        let reply = resolver.resolve(&text, Language::En);
        session.finish_reply(&reply);

        assert!(!session.shows_indicator());
        assert!(!session.is_typing());
        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::Bot]);

        let ids: Vec<u32> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_enter_during_composition_does_not_submit() {
        assert!(submits_on_key("Enter", false));
        assert!(!submits_on_key("Enter", true));
        assert!(!submits_on_key("a", false));
    }

    #[test]
    fn test_indicator_requires_pending_send() {
        let mut session = ChatSession::new();
        session.show_indicator();
        assert!(!session.shows_indicator());
    }
}
