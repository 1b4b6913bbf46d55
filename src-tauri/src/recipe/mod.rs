pub mod draft;
pub mod seed;
pub mod types;

pub use draft::{generate_recipe_id, FieldErrors, RecipeDraft};
pub use seed::{baseline_recipes, is_baseline_id};
pub use types::{format_price, Course, Recipe};
