//! Site Configuration
//!
//! Tunables for every widget. Defaults match the shipped site; a page may
//! override any subset with
//! `<script type="application/json" id="site-config">{ ... }</script>`.

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Widths at or below this use touch behaviour
    pub mobile_breakpoint_px: f64,
    pub hover_close_delay_ms: u32,
    pub focus_first_item_delay_ms: u32,
    pub chat_focus_delay_ms: u32,
    pub typing_indicator_delay_ms: u32,
    pub reply_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    pub theme_storage_key: String,
    pub language_storage_key: String,
    pub locales_base_path: String,
    /// Brand substring highlighted by the text styler
    pub highlight_needle: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 767.98,
            hover_close_delay_ms: 300,
            focus_first_item_delay_ms: 100,
            chat_focus_delay_ms: 300,
            typing_indicator_delay_ms: 500,
            reply_delay_ms: 1500,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            theme_storage_key: "theme".to_string(),
            language_storage_key: "language".to_string(),
            locales_base_path: "./locales".to_string(),
            highlight_needle: "adam".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> SiteResult<()> {
        if self.counter_frame_ms == 0 {
            return Err(SiteError::Config("counter_frame_ms must be positive".into()));
        }
        if self.highlight_needle.is_empty() {
            return Err(SiteError::Config("highlight_needle must not be empty".into()));
        }
        Ok(())
    }

    /// Read the inline config element, falling back to defaults
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[CONFIG] {}; using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn locale_url(&self, language_code: &str) -> String {
        format!("{}/{}.json", self.locales_base_path.trim_end_matches('/'), language_code)
    }

    pub fn menu_timing(&self) -> leptos_megamenu::MenuTiming {
        leptos_megamenu::MenuTiming {
            breakpoint: self.mobile_breakpoint_px,
            hover_close_delay_ms: self.hover_close_delay_ms,
            focus_first_item_delay_ms: self.focus_first_item_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "hover_close_delay_ms": 450, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.hover_close_delay_ms, 450);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.reply_delay_ms, 1500);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SiteConfig::from_json(r#"{ "counter_frame_ms": 0 }"#).is_err());
        assert!(SiteConfig::from_json(r#"{ "highlight_needle": "" }"#).is_err());
        assert!(SiteConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_locale_url() {
        let mut config = SiteConfig::default();
        assert_eq!(config.locale_url("ar"), "./locales/ar.json");
        config.locales_base_path = "/static/locales/".into();
        assert_eq!(config.locale_url("en"), "/static/locales/en.json");
    }

    #[test]
    fn test_menu_timing() {
        let timing = SiteConfig::default().menu_timing();
        assert_eq!(timing, leptos_megamenu::MenuTiming::default());
    }
}
