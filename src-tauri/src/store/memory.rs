use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::KeyValueStore;
use crate::error::ChefsMenuError;

/// In-process store. Used by tests and anywhere a throwaway store is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `save` always fails, for exercising fail-soft paths.
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_saves: true,
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries().insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) -> bool {
        self.entries().remove(key).is_some()
    }

    fn save(&self) -> Result<(), ChefsMenuError> {
        if self.fail_saves {
            return Err(ChefsMenuError::Storage("disk unavailable".to_string()));
        }
        Ok(())
    }
}
