use serde::{Deserialize, Serialize};

use super::types::{Course, Recipe};

/// Generate a recipe id: 128 random bits as 32 lowercase hex chars.
pub fn generate_recipe_id() -> String {
    let value: u128 = rand::random();
    format!("{:032x}", value)
}

/// Raw add-recipe form input, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Per-field validation messages, shown next to each input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    /// Apply the form rules to a recipe that did not come through a draft.
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            name: name_error(&recipe.name),
            description: description_error(&recipe.description),
            price: price_error(recipe.price),
        }
    }

    /// All messages on one line, in form order.
    pub fn summary(&self) -> String {
        [&self.name, &self.description, &self.price]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn name_error(name: &str) -> Option<String> {
    name.trim()
        .is_empty()
        .then(|| "Dish name is required.".to_string())
}

fn description_error(description: &str) -> Option<String> {
    description
        .trim()
        .is_empty()
        .then(|| "Description is required.".to_string())
}

fn price_error(price: f64) -> Option<String> {
    if !price.is_finite() {
        Some("Valid price is required.".to_string())
    } else if price < 0.0 {
        Some("Price cannot be negative.".to_string())
    } else {
        None
    }
}

impl RecipeDraft {
    /// Check every field and build a new recipe with a fresh id.
    /// All failing fields are reported together.
    pub fn validate(self) -> Result<Recipe, FieldErrors> {
        let parsed = self.price.trim().parse::<f64>();
        let errors = FieldErrors {
            name: name_error(&self.name),
            description: description_error(&self.description),
            price: match parsed {
                Ok(p) => price_error(p),
                Err(_) => Some("Valid price is required.".to_string()),
            },
        };

        let price = match parsed {
            Ok(p) if errors.is_empty() => p,
            _ => return Err(errors),
        };

        let course = if self.course.trim().is_empty() {
            Course::default().as_str().to_string()
        } else {
            Course::parse(&self.course)
                .map(|c| c.as_str().to_string())
                .unwrap_or(self.course)
        };

        Ok(Recipe {
            id: generate_recipe_id(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.filter(|s| !s.trim().is_empty()),
            ingredients: Vec::new(),
            instructions: String::new(),
            course,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str, price: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            description: description.to_string(),
            course: "main".to_string(),
            price: price.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_valid_draft_builds_recipe() {
        let recipe = draft("Test Dish", "d", "9.99").validate().unwrap();
        assert_eq!(recipe.name, "Test Dish");
        assert_eq!(recipe.course, "main");
        assert_eq!(recipe.price, 9.99);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.id.len(), 32);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = draft("", "  ", "abc").validate().unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Dish name is required."));
        assert_eq!(errors.description.as_deref(), Some("Description is required."));
        assert_eq!(errors.price.as_deref(), Some("Valid price is required."));
    }

    #[test]
    fn test_empty_price_rejected() {
        let errors = draft("Soup", "Hot", "").validate().unwrap_err();
        assert!(errors.name.is_none());
        assert_eq!(errors.price.as_deref(), Some("Valid price is required."));
    }

    #[test]
    fn test_negative_price_rejected() {
        let errors = draft("Soup", "Hot", "-1").validate().unwrap_err();
        assert_eq!(errors.price.as_deref(), Some("Price cannot be negative."));
    }

    #[test]
    fn test_course_defaults_to_starter() {
        let mut d = draft("Soup", "Hot", "3");
        d.course = String::new();
        assert_eq!(d.validate().unwrap().course, "starter");
    }

    #[test]
    fn test_blank_image_dropped() {
        let mut d = draft("Soup", "Hot", "3");
        d.image = Some("  ".to_string());
        assert!(d.validate().unwrap().image.is_none());
    }

    #[test]
    fn test_infinite_price_rejected() {
        let errors = draft("Soup", "Hot", "inf").validate().unwrap_err();
        assert_eq!(errors.price.as_deref(), Some("Valid price is required."));
    }

    #[test]
    fn test_for_recipe_applies_form_rules() {
        let mut recipe = draft("Soup", "Hot", "3").validate().unwrap();
        assert!(FieldErrors::for_recipe(&recipe).is_empty());

        recipe.name = " ".to_string();
        recipe.price = -2.0;
        let errors = FieldErrors::for_recipe(&recipe);
        assert_eq!(errors.name.as_deref(), Some("Dish name is required."));
        assert!(errors.description.is_none());
        assert_eq!(errors.price.as_deref(), Some("Price cannot be negative."));
        assert_eq!(errors.summary(), "Dish name is required. Price cannot be negative.");
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_recipe_id(), generate_recipe_id());
        assert!(generate_recipe_id().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
