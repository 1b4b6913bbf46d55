//! UI preference commands, backed by their own store file.

use std::sync::Arc;

use tauri::{AppHandle, Wry};
use tauri_plugin_store::{Store, StoreExt};
use tracing::warn;

use crate::store::{Preferences, PREFERENCES_FILE};

fn open_preferences(app: &AppHandle) -> Result<Preferences<Arc<Store<Wry>>>, String> {
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open {}: {}", PREFERENCES_FILE, e);
        e.to_string()
    })?;
    Ok(Preferences::new(store))
}

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    Ok(open_preferences(&app)?.get(key))
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    open_preferences(&app)?.set(key, value).map_err(|e| {
        warn!("Failed to save preference {}: {}", key, e);
        e.to_string()
    })
}
