//! Chatbot
//!
//! Scripted FAQ assistant: session state plus a pluggable reply strategy.

mod replies;
mod resolver;
mod session;

pub use replies::CannedReplies;
pub use resolver::{KeywordResolver, KeywordRule, Reply, ResponseResolver, Topic, DEFAULT_RULES};
pub use session::{submits_on_key, ChatSession};
