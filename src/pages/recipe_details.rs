use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, Recipe};

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Recipe),
    Error(String),
}

#[component]
pub fn RecipeDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    // One request per visit. If the page is gone when it resolves, the
    // result is dropped by try_set.
    Effect::new(move |_| {
        let recipe_id = params.read().get("id");
        spawn_local(async move {
            let next = match commands::get_recipe_details(recipe_id).await {
                Ok(recipe) => DetailState::Loaded(recipe),
                Err(e) => DetailState::Error(e),
            };
            let _ = set_state.try_set(next);
        });
    });

    move || match state.get() {
        DetailState::Loading => view! {
            <div class="page loading-page">
                <div class="spinner">"Loading..."</div>
            </div>
        }
        .into_any(),
        DetailState::Error(message) => view! {
            <div class="page error-page">
                <p class="error-title">{message}</p>
                <p class="error-subtitle">"Please try again later."</p>
            </div>
        }
        .into_any(),
        DetailState::Loaded(recipe) => {
            let price = format!("${}", recipe.display_price());
            view! {
                <div class="page recipe-details-page">
                    <h2>{recipe.name.clone()}</h2>
                    {recipe.image.clone().map(|src| view! { <img class="recipe-image" src=src alt="" /> })}

                    <h3 class="section-title">"Description"</h3>
                    <p>{recipe.description.clone()}</p>

                    <h3 class="section-title">"Ingredients"</h3>
                    <ul class="ingredient-list">
                        {recipe.ingredients.iter().map(|i| view! { <li>{i.clone()}</li> }).collect::<Vec<_>>()}
                    </ul>

                    <h3 class="section-title">"Instructions"</h3>
                    <p>{recipe.instructions.clone()}</p>

                    <h3 class="section-title">"Course"</h3>
                    <p>{recipe.course.clone()}</p>

                    <h3 class="section-title">"Price"</h3>
                    <p class="price">{price}</p>
                </div>
            }
            .into_any()
        }
    }
}
