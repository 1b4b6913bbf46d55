//! Durable key-value persistence.
//!
//! The app keeps one local store file with independent keys: `recipes` for
//! user-added dishes and `email` for the remembered login. UI preferences
//! live in a second file (`preferences.json`). Everything above this layer
//! talks to the [`KeyValueStore`] trait so it can run against the Tauri
//! store plugin in the app and against [`MemoryStore`] in tests.

mod memory;
mod preferences;
mod recipes;

use std::sync::Arc;

use serde_json::Value;
use tauri::Runtime;

use crate::error::ChefsMenuError;

pub use memory::MemoryStore;
pub use preferences::{Preferences, PREFERENCES_FILE};
pub use recipes::{RecipeStore, RECIPES_KEY};

/// Minimal key-value contract shared by the Tauri store and test doubles.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
    /// Remove a key. Returns true if it existed.
    fn delete(&self, key: &str) -> bool;
    /// Flush pending writes to durable storage.
    fn save(&self) -> Result<(), ChefsMenuError>;
}

impl<R: Runtime> KeyValueStore for tauri_plugin_store::Store<R> {
    fn get(&self, key: &str) -> Option<Value> {
        tauri_plugin_store::Store::get(self, key)
    }

    fn set(&self, key: &str, value: Value) {
        tauri_plugin_store::Store::set(self, key, value)
    }

    fn delete(&self, key: &str) -> bool {
        tauri_plugin_store::Store::delete(self, key)
    }

    fn save(&self) -> Result<(), ChefsMenuError> {
        tauri_plugin_store::Store::save(self).map_err(|e| ChefsMenuError::Storage(e.to_string()))
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        (**self).delete(key)
    }

    fn save(&self) -> Result<(), ChefsMenuError> {
        (**self).save()
    }
}
