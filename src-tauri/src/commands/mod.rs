pub mod auth;
pub mod config;
pub mod recipes;

use std::sync::Arc;

use tauri::{AppHandle, Wry};
use tauri_plugin_store::{Store, StoreExt};
use tracing::warn;

use crate::config::AppConfig;

/// Open the store file that holds recipes and the remembered email.
fn open_app_store(app: &AppHandle, config: &AppConfig) -> Result<Arc<Store<Wry>>, String> {
    app.store(config.store_file.as_str()).map_err(|e| {
        warn!("Failed to open store {}: {}", config.store_file, e);
        e.to_string()
    })
}
