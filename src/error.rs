//! Site Errors
//!
//! Everything here is recoverable: callers log and fall back to a default.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("could not decode {what}: {reason}")]
    Decode { what: String, reason: String },
    #[error("local storage unavailable: {0}")]
    Storage(String),
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("element not found: {0}")]
    MissingElement(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

/// Render a thrown JS value for log output
pub fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SiteError::Fetch { url: "./locales/ar.json".into(), reason: "404".into() };
        assert_eq!(err.to_string(), "fetch failed for ./locales/ar.json: 404");
        assert_eq!(
            SiteError::MissingElement("#chatbotWindow".into()).to_string(),
            "element not found: #chatbotWindow"
        );
    }
}
