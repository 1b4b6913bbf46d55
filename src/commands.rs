use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Types matching backend structs --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
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
    pub course: String,
    pub price: f64,
}

impl Recipe {
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Add-recipe form input, sent as typed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedLogin {
    pub email: String,
    pub password: String,
}

// -- Arg structs for serialization --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginArgs {
    email: String,
    password: String,
    remember_me: bool,
}

#[derive(Serialize)]
struct BuildRecipeArgs {
    draft: RecipeDraft,
}

#[derive(Serialize)]
struct AddRecipeArgs {
    recipe: Recipe,
}

#[derive(Serialize)]
struct DeleteRecipeArgs {
    id: String,
    confirmed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDetailsArgs {
    recipe_id: Option<String>,
}

#[derive(Serialize)]
struct GetPreferenceArgs {
    key: String,
}

#[derive(Serialize)]
struct SetPreferenceArgs {
    key: String,
    value: String,
}

// -- Typed invoke helpers --

fn error_text(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

async fn call<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> Result<T, String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke(cmd, args).await.map_err(error_text)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

async fn call_unit<A: Serialize>(cmd: &str, args: &A) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, args).await.map(|_| ()).map_err(error_text)
}

pub async fn login(email: &str, password: &str, remember_me: bool) -> Result<(), String> {
    call_unit(
        "login",
        &LoginArgs {
            email: email.to_string(),
            password: password.to_string(),
            remember_me,
        },
    )
    .await
}

pub async fn get_remembered_login() -> Result<Option<SavedLogin>, String> {
    call("get_remembered_login", &serde_json::json!({})).await
}

pub async fn list_recipes() -> Result<Vec<Recipe>, String> {
    call("list_recipes", &serde_json::json!({})).await
}

/// Validate the form. On failure returns the per-field messages.
pub async fn build_recipe(draft: RecipeDraft) -> Result<Recipe, FieldErrors> {
    match call::<_, Recipe>("build_recipe", &BuildRecipeArgs { draft }).await {
        Ok(recipe) => Ok(recipe),
        Err(e) => Err(serde_json::from_str(&e).unwrap_or(FieldErrors {
            name: Some(e),
            ..FieldErrors::default()
        })),
    }
}

pub async fn add_recipe(recipe: Recipe) -> Result<Vec<Recipe>, String> {
    call("add_recipe", &AddRecipeArgs { recipe }).await
}

pub async fn delete_recipe(id: &str, confirmed: bool) -> Result<Vec<Recipe>, String> {
    call(
        "delete_recipe",
        &DeleteRecipeArgs {
            id: id.to_string(),
            confirmed,
        },
    )
    .await
}

pub async fn get_recipe_details(recipe_id: Option<String>) -> Result<Recipe, String> {
    call("get_recipe_details", &RecipeDetailsArgs { recipe_id }).await
}

pub async fn get_preference(key: &str) -> Result<Option<String>, String> {
    call(
        "get_preference",
        &GetPreferenceArgs {
            key: key.to_string(),
        },
    )
    .await
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), String> {
    call_unit(
        "set_preference",
        &SetPreferenceArgs {
            key: key.to_string(),
            value: value.to_string(),
        },
    )
    .await
}
