//! Resolves the full record shown on the recipe details screen.
//!
//! The app has no server, so [`DemoRecipeSource`] stands in for one and
//! returns fixed demo content after a short delay. [`CatalogRecipeSource`]
//! resolves against the loaded catalog instead.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::ChefsMenuError;
use crate::recipe::Recipe;

const NOT_FOUND: &str = "Recipe not found";

/// Loads one recipe's full detail record by id.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// `None` or an empty id resolves to `NotFound` without waiting.
    async fn fetch(&self, id: Option<&str>) -> Result<Recipe, ChefsMenuError>;
}

fn require_id(id: Option<&str>) -> Result<&str, ChefsMenuError> {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ChefsMenuError::NotFound(NOT_FOUND.to_string())),
    }
}

pub struct DemoRecipeSource {
    delay: Duration,
}

impl DemoRecipeSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RecipeSource for DemoRecipeSource {
    async fn fetch(&self, id: Option<&str>) -> Result<Recipe, ChefsMenuError> {
        let id = require_id(id)?;
        debug!("Fetching demo details for {} ({:?} delay)", id, self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(demo_recipe(id))
    }
}

/// Looks the id up in a catalog snapshot.
pub struct CatalogRecipeSource {
    recipes: Vec<Recipe>,
    delay: Duration,
}

impl CatalogRecipeSource {
    pub fn new(recipes: Vec<Recipe>, delay: Duration) -> Self {
        Self { recipes, delay }
    }
}

#[async_trait]
impl RecipeSource for CatalogRecipeSource {
    async fn fetch(&self, id: Option<&str>) -> Result<Recipe, ChefsMenuError> {
        let id = require_id(id)?;
        tokio::time::sleep(self.delay).await;
        let recipe = self
            .recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ChefsMenuError::NotFound(NOT_FOUND.to_string()))?;
        info!("Resolved details for '{}' ({})", recipe.name, id);
        Ok(recipe)
    }
}

fn demo_recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: "Spaghetti Carbonara".to_string(),
        description: "A classic Italian pasta dish with eggs, cheese, pancetta, and pepper."
            .to_string(),
        image: Some("assets/images/Spaghetti.jpg".to_string()),
        ingredients: ["Spaghetti", "Pancetta", "Eggs", "Parmesan Cheese", "Black Pepper"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        instructions:
            "Cook the pasta. Fry the pancetta. Mix eggs and cheese. Combine all ingredients and serve."
                .to_string(),
        course: "main".to_string(),
        price: 12.99,
    }
}
