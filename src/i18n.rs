//! Internationalization
//!
//! English/Arabic translation tables loaded once from `locales/*.json`.
//! Keys are dotted paths into nested objects (`chatbot.welcome.message`).
//! Missing keys fall back to English, then to the key itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_reason, SiteError, SiteResult};
use crate::storage::{read_or_none, write_or_log, PreferenceStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Name of this language written in itself, for the toggle label
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }
}

/// Both translation tables; never mutated after load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    en: Value,
    ar: Value,
}

impl Translations {
    pub fn new(en: Value, ar: Value) -> Self {
        Self { en, ar }
    }

    pub fn from_json(en: &str, ar: &str) -> SiteResult<Self> {
        let parse = |what: &str, text: &str| {
            serde_json::from_str::<Value>(text).map_err(|e| SiteError::Decode {
                what: what.to_string(),
                reason: e.to_string(),
            })
        };
        Ok(Self::new(parse("en.json", en)?, parse("ar.json", ar)?))
    }

    fn table(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Whether the table for `language` actually loaded
    pub fn has(&self, language: Language) -> bool {
        self.table(language).is_object()
    }

    /// Translation without the key fallback
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        lookup_path(self.table(language), key).or_else(|| {
            if language == Language::En {
                None
            } else {
                lookup_path(&self.en, key)
            }
        })
    }

    pub fn translate(&self, language: Language, key: &str) -> String {
        self.lookup(language, key).unwrap_or(key).to_string()
    }
}

/// Walk a dotted path. Non-string leaves and empty strings count as missing.
fn lookup_path<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(table, |node, segment| node.get(segment))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Persisted language, or English
pub fn load_language(store: &impl PreferenceStore, key: &str) -> Language {
    read_or_none(store, key)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(store: &impl PreferenceStore, key: &str, language: Language) {
    write_or_log(store, key, language.code());
}

// ========================
// Loading
// ========================

async fn fetch_json(url: &str) -> SiteResult<Value> {
    let fetch_err = |reason: String| SiteError::Fetch { url: url.to_string(), reason };

    let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_err(js_reason(&e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| fetch_err(js_reason(&e)))?;
    if !response.ok() {
        return Err(fetch_err(format!("HTTP {}", response.status())));
    }
    let body = response.json().map_err(|e| fetch_err(js_reason(&e)))?;
    let body = JsFuture::from(body).await.map_err(|e| fetch_err(js_reason(&e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| SiteError::Decode {
        what: url.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch both tables. A table that fails to load is left empty so lookups
/// fall through to the key.
pub async fn load_translations(en_url: &str, ar_url: &str) -> Translations {
    let load = |result: SiteResult<Value>| {
        result.unwrap_or_else(|e| {
            log::warn!("[I18N] {}", e);
            Value::Null
        })
    };
    let en = load(fetch_json(en_url).await);
    let ar = load(fetch_json(ar_url).await);
    Translations::new(en, ar)
}

// ========================
// Document binding
// ========================

/// Set `<html lang dir>` and the body `rtl` class
pub fn apply_direction(language: Language) {
    let doc = match document() {
        Ok(doc) => doc,
        Err(e) => return log::warn!("[I18N] {}", e),
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", language.code());
        let _ = root.set_attribute("dir", language.dir());
    }
    if let Some(body) = doc.body() {
        let _ = body.class_list().toggle_with_force("rtl", language.is_rtl());
    }
}

/// Rewrite every `data-i18n*` bound element in the document
pub fn apply_to_document(translations: &Translations, language: Language) {
    let doc = match document() {
        Ok(doc) => doc,
        Err(e) => return log::warn!("[I18N] {}", e),
    };
    let t = |key: &str| translations.translate(language, key);

    for el in select_all(&doc, "[data-i18n]") {
        let Some(key) = el.get_attribute("data-i18n") else { continue };
        match el.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input) if input.type_() == "text" => input.set_placeholder(&t(&key)),
            _ => el.set_text_content(Some(&t(&key))),
        }
    }

    for el in select_all(&doc, "[data-i18n-placeholder]") {
        let Some(key) = el.get_attribute("data-i18n-placeholder") else { continue };
        let _ = el.set_attribute("placeholder", &t(&key));
    }

    for el in select_all(&doc, "[data-i18n-title]") {
        let Some(key) = el.get_attribute("data-i18n-title") else { continue };
        let _ = el.set_attribute("title", &t(&key));
    }

    for el in select_all(&doc, "[data-i18n-aria-label]") {
        let Some(key) = el.get_attribute("data-i18n-aria-label") else { continue };
        let _ = el.set_attribute("aria-label", &t(&key));
    }
}

fn document() -> SiteResult<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::MissingElement("document".into()))
}

fn select_all(doc: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;
    use serde_json::json;

    fn tables() -> Translations {
        Translations::new(
            json!({
                "nav": { "home": "Home", "contact": "Contact" },
                "chatbot": { "welcome": { "message": "Hello!" } },
                "empty": ""
            }),
            json!({
                "nav": { "home": "الرئيسية" },
                "empty": ""
            }),
        )
    }

    #[test]
    fn test_dotted_lookup() {
        let t = tables();
        assert_eq!(t.translate(Language::En, "chatbot.welcome.message"), "Hello!");
        assert_eq!(t.translate(Language::Ar, "nav.home"), "الرئيسية");
    }

    #[test]
    fn test_falls_back_to_english_then_key() {
        let t = tables();
        assert_eq!(t.translate(Language::Ar, "nav.contact"), "Contact");
        assert_eq!(t.translate(Language::Ar, "nav.missing"), "nav.missing");
        assert_eq!(t.translate(Language::En, "empty"), "empty");
    }

    #[test]
    fn test_partial_path_is_not_a_translation() {
        let t = tables();
        assert_eq!(t.translate(Language::En, "nav"), "nav");
        assert_eq!(t.translate(Language::En, "nav.home.deeper"), "nav.home.deeper");
    }

    #[test]
    fn test_unloaded_tables_return_keys() {
        let t = Translations::default();
        assert!(!t.has(Language::Ar));
        assert_eq!(t.translate(Language::Ar, "nav.home"), "nav.home");
        assert!(tables().has(Language::Ar));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("AR"), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::En.other().native_name(), "العربية");
    }

    #[test]
    fn test_persisted_language() {
        let store = MemoryPreferences::default();
        assert_eq!(load_language(&store, "language"), Language::En);
        save_language(&store, "language", Language::Ar);
        assert_eq!(load_language(&store, "language"), Language::Ar);
        store.set("language", "xx").unwrap();
        assert_eq!(load_language(&store, "language"), Language::En);
    }

    #[test]
    fn test_shipped_locales_parse() {
        let t = Translations::from_json(
            include_str!("../public/locales/en.json"),
            include_str!("../public/locales/ar.json"),
        )
        .unwrap();
        assert_ne!(t.translate(Language::En, "nav.home"), "nav.home");
        assert_ne!(t.translate(Language::Ar, "nav.home"), t.translate(Language::En, "nav.home"));
    }
}
