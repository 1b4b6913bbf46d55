pub mod auth;
pub mod catalog;
mod commands;
pub mod config;
pub mod detail;
mod error;
pub mod filter;
pub mod recipe;
pub mod store;

pub use catalog::{Confirmation, RecipeCatalog};
pub use error::ChefsMenuError;
pub use recipe::{Recipe, RecipeDraft};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::auth::login,
            commands::auth::get_remembered_login,
            commands::config::get_preference,
            commands::config::set_preference,
            commands::recipes::list_recipes,
            commands::recipes::build_recipe,
            commands::recipes::add_recipe,
            commands::recipes::delete_recipe,
            commands::recipes::get_recipe_details,
        ])
        .setup(|app| {
            use tauri::Manager;
            let config = match app.path().app_config_dir() {
                Ok(dir) => config::AppConfig::load_or_default(&dir.join(config::CONFIG_FILE)),
                Err(e) => {
                    tracing::warn!("No app config dir, using defaults: {}", e);
                    config::AppConfig::default()
                }
            };
            tracing::info!("Using store file {}", config.store_file);
            app.manage(config);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
