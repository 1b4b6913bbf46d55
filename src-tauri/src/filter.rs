use crate::recipe::Recipe;

/// Recipes whose name contains `term`, ignoring case, in their original order.
/// An empty term matches everything.
pub fn filter_recipes(recipes: &[Recipe], term: &str) -> Vec<Recipe> {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
