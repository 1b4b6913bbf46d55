use serde_json::Value;
use tracing::{info, warn};

use super::KeyValueStore;
use crate::error::ChefsMenuError;
use crate::recipe::Recipe;

/// Key holding the JSON array of persisted recipes.
pub const RECIPES_KEY: &str = "recipes";

/// Reads and writes the persisted recipe collection.
pub struct RecipeStore<S> {
    kv: S,
}

impl<S: KeyValueStore> RecipeStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Load persisted recipes in stored order.
    ///
    /// Never fails: an absent key yields an empty list, a value that is not
    /// a JSON array is logged and treated as empty, and elements that do not
    /// parse as a recipe are skipped.
    pub fn load(&self) -> Vec<Recipe> {
        let Some(value) = self.kv.get(RECIPES_KEY) else {
            return Vec::new();
        };

        let items = match value {
            Value::Array(items) => items,
            // Older builds stored the array as a JSON string.
            Value::String(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Failed to parse stored recipes: {}", e);
                    return Vec::new();
                }
            },
            other => {
                warn!("Stored recipes are not an array (found {}), ignoring", kind(&other));
                return Vec::new();
            }
        };

        let total = items.len();
        let recipes: Vec<Recipe> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Recipe>(item) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Skipping malformed stored recipe at index {}: {}", index, e);
                    None
                }
            })
            .collect();

        info!("Loaded {} of {} stored recipes", recipes.len(), total);
        recipes
    }

    /// Replace the persisted collection and flush it to disk.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), ChefsMenuError> {
        let value = serde_json::to_value(recipes)
            .map_err(|e| ChefsMenuError::Storage(format!("Failed to serialize recipes: {}", e)))?;
        self.kv.set(RECIPES_KEY, value);
        self.kv.save()?;
        info!("Saved {} recipes", recipes.len());
        Ok(())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
