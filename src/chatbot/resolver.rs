//! Response Resolution
//!
//! Maps free-text chat input to canned replies. [`KeywordResolver`] scans the
//! lowercased input for each topic's keywords in declaration order; the first
//! topic with a hit wins.

use super::replies::CannedReplies;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Appointment,
    Location,
    Contact,
    Treatments,
    Services,
    Hours,
}

/// Bot output for one user message; `messages` are appended in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub topic: Option<Topic>,
    pub messages: Vec<String>,
}

/// Strategy for turning a user message into a reply
pub trait ResponseResolver {
    fn resolve(&self, input: &str, language: Language) -> Reply;

    fn welcome(&self, language: Language) -> String {
        CannedReplies::for_language(language).welcome.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

/// Booking intent is declared first so "call to book" stays an appointment
pub const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::Appointment,
        keywords: &["appointment", "book", "schedule", "reserve", "موعد", "حجز"],
    },
    KeywordRule {
        topic: Topic::Location,
        keywords: &["location", "address", "where", "direction", "map", "موقع", "عنوان", "أين", "فرع"],
    },
    KeywordRule {
        topic: Topic::Contact,
        keywords: &["contact", "phone", "call", "email", "اتصال", "هاتف", "تواصل"],
    },
    KeywordRule {
        topic: Topic::Treatments,
        keywords: &["treatment", "ivf", "icsi", "fertility", "علاج", "أطفال الأنابيب", "خصوبة"],
    },
    KeywordRule {
        topic: Topic::Services,
        keywords: &["service", "department", "specialt", "خدمة", "خدمات", "قسم"],
    },
    KeywordRule {
        topic: Topic::Hours,
        keywords: &["hours", "opening", "open", "working time", "ساعات", "مواعيد العمل", "مفتوح"],
    },
];

#[derive(Debug, Clone)]
pub struct KeywordResolver {
    rules: &'static [KeywordRule],
}

impl Default for KeywordResolver {
    fn default() -> Self {
        Self { rules: DEFAULT_RULES }
    }
}

impl KeywordResolver {
    pub fn with_rules(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    pub fn topic_for(&self, input: &str) -> Option<Topic> {
        let lower = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
            .map(|rule| rule.topic)
    }
}

impl ResponseResolver for KeywordResolver {
    fn resolve(&self, input: &str, language: Language) -> Reply {
        let replies = CannedReplies::for_language(language);
        match self.topic_for(input) {
            Some(topic) => Reply {
                topic: Some(topic),
                messages: vec![replies.topic(topic).to_string()],
            },
            None => Reply {
                topic: None,
                messages: vec![replies.fallback.to_string(), replies.contact_hint.to_string()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(input: &str) -> Option<Topic> {
        KeywordResolver::default().topic_for(input)
    }

    #[test]
    fn test_booking_words_resolve_to_appointment() {
        for input in ["book", "BOOK a visit", "I need an Appointment", "Can I call to book?", "phone number to BOOK"] {
            assert_eq!(topic(input), Some(Topic::Appointment), "input: {}", input);
        }
    }

    #[test]
    fn test_each_topic() {
        assert_eq!(topic("What is your address?"), Some(Topic::Location));
        assert_eq!(topic("phone number please"), Some(Topic::Contact));
        assert_eq!(topic("Do you do IVF?"), Some(Topic::Treatments));
        assert_eq!(topic("which departments exist"), Some(Topic::Services));
        assert_eq!(topic("what are your hours"), Some(Topic::Hours));
    }

    #[test]
    fn test_arabic_keywords() {
        assert_eq!(topic("أريد حجز موعد"), Some(Topic::Appointment));
        assert_eq!(topic("ما هو رقم الهاتف"), Some(Topic::Contact));
    }

    #[test]
    fn test_mixed_phrasings_reach_the_intended_topic() {
        assert_eq!(topic("What are your clinic hours?"), Some(Topic::Hours));
        assert_eq!(topic("Is the clinic open on Friday?"), Some(Topic::Hours));
        assert_eq!(topic("How many babies? what number"), None);
        assert_eq!(topic("متى تكون العيادة مفتوح"), Some(Topic::Hours));
    }

    #[test]
    fn test_declaration_order_wins() {
        // Location is declared before contact
        assert_eq!(topic("address and phone"), Some(Topic::Location));
    }

    #[test]
    fn test_fallback_then_contact_hint() {
        let reply = KeywordResolver::default().resolve("hello", Language::En);
        assert_eq!(reply.topic, None);
        let replies = CannedReplies::for_language(Language::En);
        assert_eq!(reply.messages, vec![replies.fallback.to_string(), replies.contact_hint.to_string()]);
    }

    #[test]
    fn test_language_selects_table() {
        let resolver = KeywordResolver::default();
        let en = resolver.resolve("appointment", Language::En);
        let ar = resolver.resolve("appointment", Language::Ar);
        assert_eq!(en.topic, ar.topic);
        assert_ne!(en.messages, ar.messages);
        assert_eq!(ar.messages[0], CannedReplies::for_language(Language::Ar).topic(Topic::Appointment));
    }

    #[test]
    fn test_custom_rules() {
        const RULES: &[KeywordRule] = &[KeywordRule { topic: Topic::Hours, keywords: &["when"] }];
        let resolver = KeywordResolver::with_rules(RULES);
        assert_eq!(resolver.topic_for("When are you open?"), Some(Topic::Hours));
        assert_eq!(resolver.topic_for("book"), None);
    }
}
