//! The in-memory working set of recipes for one screen visit.
//!
//! The catalog is the baseline dishes followed by the user-added ones.
//! Only the user-added entries are persisted; the baseline is merged back
//! in on every load.

use tracing::{info, warn};

use crate::error::ChefsMenuError;
use crate::filter::filter_recipes;
use crate::recipe::{baseline_recipes, is_baseline_id, FieldErrors, Recipe};
use crate::store::{KeyValueStore, RecipeStore};

/// Answer to the "Delete Recipe" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Cancel,
    Confirm,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirm
        } else {
            Confirmation::Cancel
        }
    }
}

pub struct RecipeCatalog<S> {
    store: RecipeStore<S>,
    baseline: Vec<Recipe>,
    added: Vec<Recipe>,
}

impl<S: KeyValueStore> RecipeCatalog<S> {
    /// Build the catalog from the baseline plus whatever the store holds.
    ///
    /// Stored entries that reuse a baseline id are dropped; builds before
    /// the delta format wrote the whole list, baseline included.
    pub fn load(store: RecipeStore<S>) -> Self {
        let mut added = store.load();
        let before = added.len();
        added.retain(|r| !is_baseline_id(&r.id));
        if added.len() != before {
            info!("Dropped {} stored copies of baseline recipes", before - added.len());
        }

        Self {
            store,
            baseline: baseline_recipes(),
            added,
        }
    }

    /// All recipes, baseline first, then user-added in insertion order.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.baseline.iter().chain(self.added.iter())
    }

    pub fn len(&self) -> usize {
        self.baseline.len() + self.added.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|r| r.id == id)
    }

    /// The visible subset for a search term.
    pub fn search(&self, term: &str) -> Vec<Recipe> {
        filter_recipes(&self.recipes(), term)
    }

    /// Append a recipe and persist.
    ///
    /// Rejects a recipe that fails the add-form field rules, and an id
    /// already in the catalog. Storage failures are logged and the
    /// in-memory append stands.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), ChefsMenuError> {
        if recipe.id.trim().is_empty() {
            return Err(ChefsMenuError::Validation("Recipe id is required.".to_string()));
        }
        let errors = FieldErrors::for_recipe(&recipe);
        if !errors.is_empty() {
            return Err(ChefsMenuError::Validation(errors.summary()));
        }
        if self.get(&recipe.id).is_some() {
            return Err(ChefsMenuError::Validation(format!(
                "A recipe with id {} already exists",
                recipe.id
            )));
        }

        info!("Adding recipe '{}' ({})", recipe.name, recipe.id);
        self.added.push(recipe);
        self.persist();
        Ok(())
    }

    /// Remove a recipe by id once the user has answered the prompt.
    ///
    /// `Cancel` leaves the catalog untouched and returns `Ok(None)`.
    pub fn remove(
        &mut self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<Option<Recipe>, ChefsMenuError> {
        if is_baseline_id(id) {
            return Err(ChefsMenuError::Validation(
                "Built-in recipes cannot be deleted".to_string(),
            ));
        }

        let Some(index) = self.added.iter().position(|r| r.id == id) else {
            return Err(ChefsMenuError::NotFound(format!("Recipe {} not found", id)));
        };

        if confirmation == Confirmation::Cancel {
            info!("Delete of recipe {} cancelled", id);
            return Ok(None);
        }

        let removed = self.added.remove(index);
        info!("Deleted recipe '{}' ({})", removed.name, removed.id);
        self.persist();
        Ok(Some(removed))
    }

    /// Write the user-added entries back. Failures are logged, not returned.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(&self.added) {
            warn!("Failed to save the recipes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeDraft;
    use crate::store::{MemoryStore, RECIPES_KEY};
    use std::sync::Arc;

    fn make_recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            description: "d".to_string(),
            image: None,
            ingredients: Vec::new(),
            instructions: String::new(),
            course: "main".to_string(),
            price: 9.99,
        }
    }

    fn empty_catalog() -> (RecipeCatalog<Arc<MemoryStore>>, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        let catalog = RecipeCatalog::load(RecipeStore::new(kv.clone()));
        (catalog, kv)
    }

    #[test]
    fn test_load_without_stored_data_is_baseline() {
        let (catalog, _kv) = empty_catalog();
        assert_eq!(catalog.recipes(), baseline_recipes());
    }

    #[test]
    fn test_load_puts_baseline_first_then_stored_order() {
        let kv = Arc::new(MemoryStore::new());
        RecipeStore::new(kv.clone())
            .save(&[make_recipe("z", "Zucchini"), make_recipe("a", "Apple Pie")])
            .unwrap();

        let catalog = RecipeCatalog::load(RecipeStore::new(kv));
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "z", "a"]);
    }

    #[test]
    fn test_load_drops_stored_baseline_copies() {
        let kv = Arc::new(MemoryStore::new());
        let mut legacy = baseline_recipes();
        legacy.push(make_recipe("x", "Extra"));
        RecipeStore::new(kv.clone()).save(&legacy).unwrap();

        let catalog = RecipeCatalog::load(RecipeStore::new(kv));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_add_persists_only_user_entries() {
        let (mut catalog, kv) = empty_catalog();
        catalog.add(make_recipe("x", "Extra")).unwrap();

        let stored = kv.get(RECIPES_KEY).unwrap();
        let stored: Vec<Recipe> = serde_json::from_value(stored).unwrap();
        assert_eq!(stored, vec![make_recipe("x", "Extra")]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let (mut catalog, _kv) = empty_catalog();
        catalog.add(make_recipe("x", "Extra")).unwrap();
        assert!(matches!(
            catalog.add(make_recipe("x", "Other")),
            Err(ChefsMenuError::Validation(_))
        ));
        assert!(matches!(
            catalog.add(make_recipe("1", "Clash")),
            Err(ChefsMenuError::Validation(_))
        ));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_add_rejects_recipe_failing_field_rules() {
        let (mut catalog, kv) = empty_catalog();

        let mut negative = make_recipe("x", "Extra");
        negative.price = -5.0;
        let err = catalog.add(negative).unwrap_err();
        assert_eq!(err.to_string(), "Price cannot be negative.");

        let blank_name = make_recipe("y", "   ");
        assert!(matches!(catalog.add(blank_name), Err(ChefsMenuError::Validation(_))));

        let no_id = make_recipe("", "Soup");
        assert!(matches!(catalog.add(no_id), Err(ChefsMenuError::Validation(_))));

        assert_eq!(catalog.len(), 3);
        assert!(kv.get(RECIPES_KEY).is_none());
    }

    #[test]
    fn test_add_then_remove_restores_sequence() {
        let (mut catalog, _kv) = empty_catalog();
        catalog.add(make_recipe("x", "Extra")).unwrap();
        let before = catalog.recipes();

        catalog.add(make_recipe("y", "Another")).unwrap();
        let removed = catalog.remove("y", Confirmation::Confirm).unwrap();
        assert_eq!(removed.map(|r| r.id), Some("y".to_string()));
        assert_eq!(catalog.recipes(), before);
    }

    #[test]
    fn test_cancelled_remove_keeps_recipe() {
        let (mut catalog, kv) = empty_catalog();
        catalog.add(make_recipe("x", "Extra")).unwrap();

        assert!(catalog.remove("x", Confirmation::Cancel).unwrap().is_none());
        assert!(catalog.get("x").is_some());

        let reloaded = RecipeCatalog::load(RecipeStore::new(kv));
        assert!(reloaded.get("x").is_some());
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let (mut catalog, _kv) = empty_catalog();
        assert!(matches!(
            catalog.remove("nope", Confirmation::Confirm),
            Err(ChefsMenuError::NotFound(_))
        ));
    }

    #[test]
    fn test_baseline_cannot_be_removed() {
        let (mut catalog, _kv) = empty_catalog();
        assert!(matches!(
            catalog.remove("2", Confirmation::Confirm),
            Err(ChefsMenuError::Validation(_))
        ));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_save_failure_keeps_in_memory_state() {
        let mut catalog = RecipeCatalog::load(RecipeStore::new(MemoryStore::failing()));
        catalog.add(make_recipe("x", "Extra")).unwrap();
        assert!(catalog.get("x").is_some());
    }

    #[test]
    fn test_test_dish_scenario() {
        let (mut catalog, kv) = empty_catalog();
        let recipe = RecipeDraft {
            name: "Test Dish".to_string(),
            description: "d".to_string(),
            course: "main".to_string(),
            price: "9.99".to_string(),
            image: None,
        }
        .validate()
        .unwrap();
        let id = recipe.id.clone();

        catalog.add(recipe).unwrap();
        assert!(catalog.get(&id).is_some());
        let hits = catalog.search("test");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);

        catalog.remove(&id, Confirmation::Confirm).unwrap();
        assert!(catalog.get(&id).is_none());
        assert!(catalog.search("test").is_empty());

        let reloaded = RecipeCatalog::load(RecipeStore::new(kv));
        assert!(reloaded.get(&id).is_none());
    }
}
