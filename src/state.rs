use leptos::prelude::*;

use crate::commands::Recipe;

/// Value to write into a field once an async restore resolves. `None` when
/// the user has already typed something, so their input wins.
pub fn restore_if_empty(current: &str, restored: String) -> Option<String> {
    (current.is_empty() && !restored.is_empty()).then_some(restored)
}

/// Whether the user has passed the login screen this session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub logged_in: ReadSignal<bool>,
    pub set_logged_in: WriteSignal<bool>,
}

/// Navigation parameter from Add-Recipe to Recipe-List: the recipe the
/// list should append when it next mounts.
#[derive(Clone, Copy)]
pub struct PendingRecipe(pub RwSignal<Option<Recipe>>);

impl PendingRecipe {
    /// Hand a recipe to the list screen.
    pub fn offer(&self, recipe: Recipe) {
        self.0.set(Some(recipe));
    }

    /// Take the pending recipe, leaving none behind.
    pub fn take(&self) -> Option<Recipe> {
        let mut taken = None;
        self.0.update(|pending| taken = pending.take());
        taken
    }
}
