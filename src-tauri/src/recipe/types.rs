use serde::{Deserialize, Serialize};

/// A dish in the catalog, either built-in seed data or added by the user.
///
/// `ingredients`, `instructions` and `image` default when missing because
/// list-view records persisted by older builds did not carry them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    /// Free text in practice; the form only offers the `Course` values.
    pub course: String,
    pub price: f64,
}

impl Recipe {
    /// Price rendered with exactly two decimals.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Render a price with two decimals, e.g. `12.00`.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Course choices offered by the add-recipe form. Known values are
/// normalized to lowercase on validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    #[default]
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// Value stored on the recipe.
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "starter",
            Course::Main => "main",
            Course::Dessert => "dessert",
        }
    }

    /// Case-insensitive parse. Returns None for anything outside the three courses.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Some(Course::Starter),
            "main" => Some(Course::Main),
            "dessert" => Some(Course::Dessert),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(19.99), "19.99");
        assert_eq!(format_price(12.0), "12.00");
        assert_eq!(format_price(0.5), "0.50");
        assert_eq!(format_price(9.999), "10.00");
    }

    #[test]
    fn test_course_parse() {
        assert_eq!(Course::parse("Main"), Some(Course::Main));
        assert_eq!(Course::parse(" dessert "), Some(Course::Dessert));
        assert_eq!(Course::parse("STARTER"), Some(Course::Starter));
        assert_eq!(Course::parse("brunch"), None);
    }

    #[test]
    fn test_recipe_json_keys() {
        let recipe = Recipe {
            id: "abc".to_string(),
            name: "Soup".to_string(),
            description: "Warm".to_string(),
            image: None,
            ingredients: vec!["Water".to_string()],
            instructions: "Boil".to_string(),
            course: "starter".to_string(),
            price: 4.5,
        };
        let value = serde_json::to_value(&recipe).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["id", "name", "description", "image", "ingredients", "instructions", "course", "price"]
        );
    }

    #[test]
    fn test_list_view_record_without_details_deserializes() {
        let json = r#"{"id":"7","name":"Pie","description":"Apple","course":"dessert","price":6}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.image.is_none());
        assert_eq!(recipe.display_price(), "6.00");
    }
}
