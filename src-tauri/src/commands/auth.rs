//! Tauri commands for the login screen.

use tauri::{AppHandle, State};
use tracing::warn;

use super::open_app_store;
use crate::auth::{CredentialGate, KeyringVault, RememberedLogin, SavedLogin};
use crate::config::AppConfig;

/// Check credentials, then save or clear the remembered login.
///
/// Failing to persist the remembered login is logged and does not fail
/// the login itself.
#[tauri::command]
pub async fn login(
    app: AppHandle,
    config: State<'_, AppConfig>,
    email: String,
    password: String,
    remember_me: bool,
) -> Result<(), String> {
    CredentialGate::new(config.auth_delay())
        .authenticate(&email, &password)
        .await?;

    match open_app_store(&app, &config) {
        Ok(store) => {
            let remembered = RememberedLogin::new(store, KeyringVault);
            let result = if remember_me {
                remembered.remember(&email, &password)
            } else {
                remembered.forget()
            };
            if let Err(e) = result {
                warn!("Failed to update remembered login: {}", e);
            }
        }
        Err(e) => warn!("Skipping remembered login update: {}", e),
    }

    Ok(())
}

/// Credentials to pre-fill the login form, read once when it mounts.
#[tauri::command]
pub fn get_remembered_login(
    app: AppHandle,
    config: State<'_, AppConfig>,
) -> Result<Option<SavedLogin>, String> {
    let store = open_app_store(&app, &config)?;
    Ok(RememberedLogin::new(store, KeyringVault).remembered())
}
