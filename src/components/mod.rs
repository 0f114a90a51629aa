//! UI Components
//!
//! Leptos components for each page widget.

mod brand_text;
mod chatbot_widget;
mod department_cards;
mod language_toggle;
mod mega_menu_nav;
mod mobile_nav;
mod stat_counter;
mod theme_toggle;

pub use brand_text::BrandText;
pub use chatbot_widget::ChatbotWidget;
pub use department_cards::DepartmentCards;
pub use language_toggle::LanguageToggle;
pub use mega_menu_nav::MegaMenuNav;
pub use mobile_nav::MobileNav;
pub use stat_counter::StatsSection;
pub use theme_toggle::ThemeToggle;
