//! Preference Storage
//!
//! Small key/value seam over `localStorage` so widgets that persist a
//! choice can be exercised without a browser.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::{js_reason, SiteError, SiteResult};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SiteResult<()>;
}

/// Browser `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> SiteResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| SiteError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| SiteError::Storage(js_reason(&e)))?
            .ok_or_else(|| SiteError::Storage("localStorage disabled".into()))
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| SiteError::Storage(js_reason(&e)))
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(js_reason(&e)))
    }
}

/// In-memory store; survives "reloads" for as long as the value lives
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SiteResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a preference, treating any storage failure as "not set"
pub fn read_or_none(store: &impl PreferenceStore, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|e| {
        log::warn!("[STORAGE] read {}: {}", key, e);
        None
    })
}

/// Persist a preference, logging and ignoring failures
pub fn write_or_log(store: &impl PreferenceStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("[STORAGE] write {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> SiteResult<Option<String>> {
            Err(SiteError::Storage("quota".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> SiteResult<()> {
            Err(SiteError::Storage("quota".into()))
        }
    }

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryPreferences::default();
        assert_eq!(read_or_none(&store, "theme"), None);
        write_or_log(&store, "theme", "dark");
        assert_eq!(read_or_none(&store, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_failures_are_swallowed() {
        assert_eq!(read_or_none(&BrokenStore, "theme"), None);
        write_or_log(&BrokenStore, "theme", "dark");
    }
}
