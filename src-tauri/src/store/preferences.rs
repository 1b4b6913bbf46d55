use serde_json::Value;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::error::ChefsMenuError;

/// Store file for UI preferences, kept apart from recipes and login data.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// String-valued UI preferences such as the last search term.
pub struct Preferences<S> {
    kv: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Missing keys and non-string values both read as unset.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.kv.get(key)? {
            Value::String(s) => Some(s),
            other => {
                warn!("Preference {} is not a string ({}), ignoring", key, other);
                None
            }
        }
    }

    /// Write and flush. An empty value clears the key.
    pub fn set(&self, key: &str, value: &str) -> Result<(), ChefsMenuError> {
        debug!("Setting preference {} = {:?}", key, value);
        if value.is_empty() {
            self.kv.delete(key);
        } else {
            self.kv.set(key, Value::String(value.to_string()));
        }
        self.kv.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_set_then_get() {
        let prefs = Preferences::new(MemoryStore::new());
        assert!(prefs.get("recipe_search").is_none());

        prefs.set("recipe_search", "pasta").unwrap();
        assert_eq!(prefs.get("recipe_search").as_deref(), Some("pasta"));
    }

    #[test]
    fn test_empty_value_clears_key() {
        let kv = Arc::new(MemoryStore::new());
        let prefs = Preferences::new(kv.clone());
        prefs.set("recipe_search", "pasta").unwrap();
        prefs.set("recipe_search", "").unwrap();

        assert!(prefs.get("recipe_search").is_none());
        assert!(kv.get("recipe_search").is_none());
    }

    #[test]
    fn test_non_string_value_reads_as_unset() {
        let kv = Arc::new(MemoryStore::new());
        kv.set("recipe_search", serde_json::json!(42));
        assert!(Preferences::new(kv).get("recipe_search").is_none());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let prefs = Preferences::new(MemoryStore::failing());
        assert!(matches!(
            prefs.set("recipe_search", "pasta"),
            Err(ChefsMenuError::Storage(_))
        ));
    }
}
