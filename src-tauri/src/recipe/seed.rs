use super::types::Recipe;

/// Built-in dishes. Always shown first, never persisted, never deleted.
pub fn baseline_recipes() -> Vec<Recipe> {
    vec![
        seed(
            "1",
            "Grilled Salmon with Herbs",
            "A delicious grilled salmon served with fresh herbs and lemon slices.",
            "fish.png",
            19.99,
        ),
        seed(
            "2",
            "Chicken Alfredo",
            "Creamy pasta with grilled chicken, Parmesan cheese, and garlic.",
            "chicken.png",
            15.99,
        ),
        seed(
            "3",
            "Beef Stroganoff",
            "Tender strips of beef in a creamy mushroom sauce, served over egg noodles.",
            "beef.png",
            18.99,
        ),
    ]
}

/// True if `id` belongs to one of the built-in dishes.
pub fn is_baseline_id(id: &str) -> bool {
    matches!(id, "1" | "2" | "3")
}

fn seed(id: &str, name: &str, description: &str, image: &str, price: f64) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: Some(format!("assets/images/{}", image)),
        ingredients: Vec::new(),
        instructions: String::new(),
        course: "Main".to_string(),
        price,
    }
}
