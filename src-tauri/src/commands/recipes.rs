//! Tauri commands for the recipe list, add-recipe and details screens.
//!
//! Each command reloads the catalog from the store, so every screen visit
//! sees what is on disk.

use std::sync::Arc;

use tauri::{AppHandle, State, Wry};
use tauri_plugin_store::Store;
use tracing::info;

use super::open_app_store;
use crate::catalog::{Confirmation, RecipeCatalog};
use crate::config::{AppConfig, DetailSourceKind};
use crate::detail::{CatalogRecipeSource, DemoRecipeSource, RecipeSource};
use crate::recipe::{Recipe, RecipeDraft};
use crate::store::RecipeStore;

fn load_catalog(
    app: &AppHandle,
    config: &AppConfig,
) -> Result<RecipeCatalog<Arc<Store<Wry>>>, String> {
    let store = open_app_store(app, config)?;
    Ok(RecipeCatalog::load(RecipeStore::new(store)))
}

/// All recipes, baseline first.
#[tauri::command]
pub fn list_recipes(app: AppHandle, config: State<'_, AppConfig>) -> Result<Vec<Recipe>, String> {
    let catalog = load_catalog(&app, &config)?;
    info!("Listed {} recipes", catalog.len());
    Ok(catalog.recipes())
}

/// Validate add-recipe form input.
///
/// On failure the error is the JSON-encoded `FieldErrors` so the form can
/// show each message next to its field.
#[tauri::command]
pub fn build_recipe(draft: RecipeDraft) -> Result<Recipe, String> {
    draft
        .validate()
        .map_err(|errors| serde_json::to_string(&errors).unwrap_or_else(|e| e.to_string()))
}

/// Append a recipe built by `build_recipe` and return the updated list.
/// The catalog re-checks the form rules, so a hand-built recipe with a blank
/// name or negative price is refused here too.
#[tauri::command]
pub fn add_recipe(
    app: AppHandle,
    config: State<'_, AppConfig>,
    recipe: Recipe,
) -> Result<Vec<Recipe>, String> {
    let mut catalog = load_catalog(&app, &config)?;
    catalog.add(recipe)?;
    Ok(catalog.recipes())
}

/// Delete a recipe once the user has answered the confirmation prompt.
#[tauri::command]
pub fn delete_recipe(
    app: AppHandle,
    config: State<'_, AppConfig>,
    id: String,
    confirmed: bool,
) -> Result<Vec<Recipe>, String> {
    let mut catalog = load_catalog(&app, &config)?;
    catalog.remove(&id, Confirmation::from(confirmed))?;
    Ok(catalog.recipes())
}

/// Full record for the details screen. A missing id is "Recipe not found".
#[tauri::command]
pub async fn get_recipe_details(
    app: AppHandle,
    config: State<'_, AppConfig>,
    recipe_id: Option<String>,
) -> Result<Recipe, String> {
    let source: Box<dyn RecipeSource> = match config.detail_source {
        DetailSourceKind::Demo => Box::new(DemoRecipeSource::new(config.detail_delay())),
        DetailSourceKind::Catalog => {
            let recipes = load_catalog(&app, &config)?.recipes();
            Box::new(CatalogRecipeSource::new(recipes, config.detail_delay()))
        }
    };

    let recipe = source.fetch(recipe_id.as_deref()).await?;
    Ok(recipe)
}
